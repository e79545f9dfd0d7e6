//! # Factory: one enum choice to a trait object.
//!
//! [`create`] maps a closed [`MachineKind`] to a concrete machine behind
//! the shared [`Machine`] contract. Callers manage a mixed fleet through
//! the contract; the kinds stay open for inspection but closed for
//! extension-by-string.

/// Which machine to build. Closed enumeration, matched exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineKind {
    Automobile,
    Motorcycle,
}

/// Common contract for everything the factory produces.
pub trait Machine {
    /// The kind this machine was created as.
    fn kind(&self) -> MachineKind;

    /// Number of wheels.
    fn wheels(&self) -> u8;

    /// Engine power.
    fn horse_power(&self) -> u32;

    /// Starts the engine.
    fn start(&mut self);

    /// Stops the engine.
    fn stop(&mut self);

    /// True while the engine runs.
    fn is_running(&self) -> bool;

    /// The kind-specific party trick.
    fn special_move(&self) -> String;
}

/// Builds the machine for the chosen kind.
pub fn create(kind: MachineKind) -> Box<dyn Machine> {
    match kind {
        MachineKind::Automobile => Box::new(Automobile {
            wheels: 4,
            horse_power: 500,
            running: false,
        }),
        MachineKind::Motorcycle => Box::new(Motorcycle {
            wheels: 2,
            horse_power: 80,
            running: false,
        }),
    }
}

struct Automobile {
    wheels: u8,
    horse_power: u32,
    running: bool,
}

impl Machine for Automobile {
    fn kind(&self) -> MachineKind {
        MachineKind::Automobile
    }

    fn wheels(&self) -> u8 {
        self.wheels
    }

    fn horse_power(&self) -> u32 {
        self.horse_power
    }

    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn special_move(&self) -> String {
        "engage 4x4".to_string()
    }
}

struct Motorcycle {
    wheels: u8,
    horse_power: u32,
    running: bool,
}

impl Machine for Motorcycle {
    fn kind(&self) -> MachineKind {
        MachineKind::Motorcycle
    }

    fn wheels(&self) -> u8 {
        self.wheels
    }

    fn horse_power(&self) -> u32 {
        self.horse_power
    }

    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn special_move(&self) -> String {
        "stand on the back wheel".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_produce_distinct_machines() {
        let car = create(MachineKind::Automobile);
        let bike = create(MachineKind::Motorcycle);

        assert_eq!(car.kind(), MachineKind::Automobile);
        assert_eq!(car.wheels(), 4);
        assert_eq!(bike.wheels(), 2);
        assert_ne!(car.special_move(), bike.special_move());
    }

    #[test]
    fn test_shared_contract_drives_a_mixed_fleet() {
        let mut fleet: Vec<Box<dyn Machine>> = vec![
            create(MachineKind::Automobile),
            create(MachineKind::Motorcycle),
        ];

        for machine in &mut fleet {
            machine.start();
        }
        assert!(fleet.iter().all(|m| m.is_running()));

        fleet[0].stop();
        assert!(!fleet[0].is_running());
        assert!(fleet[1].is_running());
    }
}
