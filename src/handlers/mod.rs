pub mod helpers;
pub mod profiles;
pub mod system;
