mod spot;

pub use spot::*;
