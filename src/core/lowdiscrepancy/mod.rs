pub mod hammersley;
pub mod primes;
pub mod radical_inverse;

pub use hammersley::*;
pub use radical_inverse::*;
