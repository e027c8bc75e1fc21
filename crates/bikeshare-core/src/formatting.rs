/// A run of `width` dashes, used between report sections.
///
/// # Examples
///
/// ```
/// use bikeshare_core::formatting::separator;
///
/// assert_eq!(separator(4), "----");
/// assert_eq!(separator(40).len(), 40);
/// ```
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Title-case `s`: the first letter of every word upper-cased, the rest
/// lower-cased. Words are split on any non-alphabetic character.
///
/// # Examples
///
/// ```
/// use bikeshare_core::formatting::title_case;
///
/// assert_eq!(title_case("monday"), "Monday");
/// assert_eq!(title_case("SATURDAY"), "Saturday");
/// assert_eq!(title_case("new york city"), "New York City");
/// ```
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

/// `true` when `answer` is one of `accepted`, ignoring ASCII case.
///
/// # Examples
///
/// ```
/// use bikeshare_core::formatting::answer_is;
///
/// assert!(answer_is("Yes", &["yes", "y"]));
/// assert!(answer_is("N", &["no", "n"]));
/// assert!(!answer_is("nope", &["no", "n"]));
/// ```
pub fn answer_is(answer: &str, accepted: &[&str]) -> bool {
    accepted.iter().any(|a| a.eq_ignore_ascii_case(answer))
}

/// Render a wall-clock duration in seconds the way the report footers do.
///
/// # Examples
///
/// ```
/// use bikeshare_core::formatting::format_elapsed;
/// use std::time::Duration;
///
/// assert_eq!(format_elapsed(Duration::from_millis(1500)), "1.5");
/// assert_eq!(format_elapsed(Duration::ZERO), "0");
/// ```
pub fn format_elapsed(elapsed: std::time::Duration) -> String {
    elapsed.as_secs_f64().to_string()
}

/// Render a float unformatted, keeping a trailing `.0` on whole numbers so a
/// mean always reads as a float.
///
/// # Examples
///
/// ```
/// use bikeshare_core::formatting::format_raw_float;
///
/// assert_eq!(format_raw_float(20.0), "20.0");
/// assert_eq!(format_raw_float(936.2345), "936.2345");
/// ```
pub fn format_raw_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
