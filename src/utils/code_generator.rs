use rand::Rng;

/// One-time verification code, always four digits.
pub fn generate_four_digit_code() -> String {
    let mut rng = rand::thread_rng();
    rng.gen_range(1000..=9999).to_string()
}
