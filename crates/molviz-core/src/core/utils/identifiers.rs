/// Reduces a raw MOL2 atom-type token to its element symbol.
///
/// ASCII digits are dropped first. The first uppercase letter becomes the
/// symbol; after that, the first lowercase letter (if any) is appended and the
/// scan stops. Characters that match neither rule are skipped. No element table
/// is consulted, so `"CL1"` yields `"C"` and tokens without an uppercase letter
/// yield an empty string.
pub fn normalize_element_symbol(raw_type: &str) -> String {
    let mut symbol = String::with_capacity(2);
    let mut first_taken = false;

    for ch in raw_type.chars().filter(|c| !c.is_ascii_digit()) {
        if !first_taken {
            if ch.is_uppercase() {
                symbol.push(ch);
                first_taken = true;
            }
        } else if ch.is_lowercase() {
            symbol.push(ch);
            break;
        }
    }
    symbol
}
