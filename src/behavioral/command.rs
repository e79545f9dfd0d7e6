//! # Command: requests as values.
//!
//! The issuing side builds a [`CarCommand`] value; the receiving side
//! ([`CarDealer`]) interprets it. The two are coupled only through the
//! command type, and the closed enum makes every request kind visible to
//! the compiler - there is no "unknown request" arm, it cannot be built.

/// A request a buyer can issue to the dealer.
///
/// A closed enumeration of command kinds, matched exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarCommand {
    /// Ask for the listing details of a car.
    RequestInfo {
        /// Model name as listed.
        model: String,
        /// Dealer listing id.
        id: u32,
    },
    /// Purchase a car.
    BuyVehicle {
        /// Model name as listed.
        model: String,
        /// Dealer listing id.
        id: u32,
    },
}

/// Executes [`CarCommand`]s and returns a receipt line per command.
#[derive(Debug, Default)]
pub struct CarDealer {
    executed: Vec<CarCommand>,
}

impl CarDealer {
    /// Creates a dealer with an empty execution log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one command and returns its receipt.
    pub fn execute(&mut self, command: CarCommand) -> String {
        let receipt = match &command {
            CarCommand::RequestInfo { model, id } => {
                format!("The information for {model} with ID {id} is foobar")
            }
            CarCommand::BuyVehicle { model, id } => {
                format!("You have successfully purchased Item {id}, a {model}")
            }
        };
        self.executed.push(command);
        receipt
    }

    /// Commands executed so far, oldest first.
    pub fn executed(&self) -> &[CarCommand] {
        &self.executed
    }
}

/// Issues commands without knowing how the dealer processes them.
pub struct Buyer<'a> {
    dealer: &'a mut CarDealer,
}

impl<'a> Buyer<'a> {
    /// Creates a buyer working against the given dealer.
    pub fn new(dealer: &'a mut CarDealer) -> Self {
        Self { dealer }
    }

    /// Requests info for a listing.
    pub fn watch_car(&mut self, model: impl Into<String>, id: u32) -> String {
        self.dealer.execute(CarCommand::RequestInfo {
            model: model.into(),
            id,
        })
    }

    /// Buys a listing.
    pub fn buy_car(&mut self, model: impl Into<String>, id: u32) -> String {
        self.dealer.execute(CarCommand::BuyVehicle {
            model: model.into(),
            id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipts_per_command_kind() {
        let mut dealer = CarDealer::new();
        let mut buyer = Buyer::new(&mut dealer);

        let info = buyer.watch_car("Ford Mondeo", 54323);
        assert_eq!(info, "The information for Ford Mondeo with ID 54323 is foobar");

        let bought = buyer.buy_car("Ferrari", 14523);
        assert_eq!(bought, "You have successfully purchased Item 14523, a Ferrari");
    }

    #[test]
    fn test_dealer_logs_commands_in_order() {
        let mut dealer = CarDealer::new();
        let mut buyer = Buyer::new(&mut dealer);
        buyer.watch_car("Ford Mondeo", 54323);
        buyer.buy_car("Ferrari", 14523);

        assert_eq!(
            dealer.executed(),
            &[
                CarCommand::RequestInfo {
                    model: "Ford Mondeo".into(),
                    id: 54323
                },
                CarCommand::BuyVehicle {
                    model: "Ferrari".into(),
                    id: 14523
                },
            ]
        );
    }
}
