use courier_core::text::random_string;

pub fn run_random_string(length: usize, numeric: bool) {
    println!("{}", random_string(length, numeric));
}
