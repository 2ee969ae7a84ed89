/// Turns a hyphenated identifier such as `fire-punch` into `Fire Punch`.
///
/// Words start after a hyphen or whitespace. Their first character is
/// upper-cased and the rest lower-cased; hyphens become single spaces and
/// existing whitespace is kept as is.
pub fn title_case(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len());
    let mut word_start = true;

    for c in identifier.chars() {
        if c == '-' {
            out.push(' ');
            word_start = true;
        } else if c.is_whitespace() {
            out.push(c);
            word_start = true;
        } else if word_start {
            out.extend(c.to_uppercase());
            word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::title_case;

    #[test]
    fn hyphens_become_spaces() {
        assert_eq!(title_case("fire-punch"), "Fire Punch");
        assert_eq!(title_case("viridian-forest-area"), "Viridian Forest Area");
    }

    #[test]
    fn single_word_and_empty() {
        assert_eq!(title_case("tackle"), "Tackle");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn existing_spaces_are_kept() {
        assert_eq!(title_case("route 1-area"), "Route 1 Area");
        assert_eq!(title_case("sea  route"), "Sea  Route");
    }

    #[test]
    fn only_the_first_letter_of_a_word_is_upper() {
        assert_eq!(title_case("DOUBLE-edge"), "Double Edge");
        assert_eq!(title_case("farfetch'd"), "Farfetch'd");
    }

    #[test]
    fn repeated_hyphens_map_one_to_one() {
        assert_eq!(title_case("a--b"), "A  B");
        assert_eq!(title_case("-x-"), " X ");
    }

    #[test]
    fn non_ascii_letters() {
        assert_eq!(title_case("éclair-île"), "Éclair Île");
    }
}
