pub mod derive;
pub mod networks;
pub mod verify;
