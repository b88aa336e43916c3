mod read_int;
mod read_string;
mod utils;
