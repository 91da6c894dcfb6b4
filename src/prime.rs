/// Trial division up to the integer square root.
pub fn is_prime(num: i64) -> bool {
    if num < 2 {
        return false;
    }
    // i <= num / i is i * i <= num without the overflow
    let mut i = 2;
    while i <= num / i {
        if num % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}
