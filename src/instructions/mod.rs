pub mod initialize;
pub mod liquidity;
pub mod swap;
pub mod vaults;
pub mod views;

pub use initialize::*;
pub use liquidity::*;
pub use swap::*;
pub use views::*;
