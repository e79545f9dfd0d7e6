//! # Abstract factory: families of related objects from one choice.
//!
//! Picking a [`CarModel`] fixes a whole family: the car and the doors
//! that fit it. Clients work with the [`Car`] and [`Door`] contracts and
//! never name a concrete type, so a Cayman can never end up with a
//! Panamera door.

/// Which car family to build. Closed enumeration, matched exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarModel {
    Cayman,
    Panamera,
}

/// Which side of the car a door is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn label(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// A door from one family.
pub trait Door {
    /// Builds the door and returns the build report.
    fn build(&self) -> String;
}

/// A car that knows how to produce its own family's parts.
pub trait Car {
    /// Model name.
    fn model(&self) -> &'static str;

    /// Produces a door matching this car's family.
    fn door(&self, side: Side) -> Box<dyn Door>;
}

/// Creates the car for the chosen model.
pub fn create(model: CarModel) -> Box<dyn Car> {
    match model {
        CarModel::Cayman => Box::new(Cayman),
        CarModel::Panamera => Box::new(Panamera),
    }
}

struct Cayman;

impl Car for Cayman {
    fn model(&self) -> &'static str {
        "Cayman"
    }

    fn door(&self, side: Side) -> Box<dyn Door> {
        Box::new(CaymanDoor { side })
    }
}

struct CaymanDoor {
    side: Side,
}

impl Door for CaymanDoor {
    fn build(&self) -> String {
        format!("Build a {} door for Cayman", self.side.label())
    }
}

struct Panamera;

impl Car for Panamera {
    fn model(&self) -> &'static str {
        "Panamera"
    }

    fn door(&self, side: Side) -> Box<dyn Door> {
        Box::new(PanameraDoor { side })
    }
}

struct PanameraDoor {
    side: Side,
}

impl Door for PanameraDoor {
    fn build(&self) -> String {
        format!("Build a {} door for Panamera", self.side.label())
    }
}
