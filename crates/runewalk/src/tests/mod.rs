mod scalar;
mod utils;
