//! Execute handlers for the CCTP contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `transmitter` - Send, receive and replace generic messages
//! - `messenger` - Deposit for burn (CW20 receive) and its replacement
//! - `attester` - Attester set and signature threshold
//! - `token_controller` - Token pairs and burn limits
//! - `owner` - Remote token messengers, body size limit and role transfers
//! - `pause` - Pause flags and the guards that read them
//!
//! Role checks happen in `contract::execute` before any handler runs.

mod attester;
mod messenger;
mod owner;
mod pause;
mod token_controller;
mod transmitter;

pub use attester::*;
pub use messenger::*;
pub use owner::*;
pub use pause::*;
pub use token_controller::*;
pub use transmitter::*;
