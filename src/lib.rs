mod clone;
mod error;
mod mt19937;
mod stream;
mod untemper;

pub use clone::{clone_from_outputs, clone_from_rng, clone_from_source};
pub use error::{Error, Result};
pub use mt19937::{temper_mix, Mt19937};
pub use stream::{compare_streams, StreamComparison};
pub use untemper::{get_bit, inv_left, inv_right, reverse_bits, untemper};
