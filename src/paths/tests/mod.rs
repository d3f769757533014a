mod euler;
mod path_length;
