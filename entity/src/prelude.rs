pub use super::aircraft::Entity as Aircraft;
pub use super::airline::Entity as Airline;
pub use super::event_log::Entity as EventLog;
pub use super::flight::Entity as Flight;
pub use super::flight_leg::Entity as FlightLeg;
pub use super::flight_schedule::Entity as FlightSchedule;
pub use super::station::Entity as Station;
