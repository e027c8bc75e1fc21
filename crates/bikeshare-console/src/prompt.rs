//! Menu prompts for the city, month and day choices.

use std::io::{BufRead, Write};

use bikeshare_core::error::Result;
use bikeshare_core::formatting::separator;
use bikeshare_core::models::{FilterSelection, CITY_OPTIONS, DAY_OPTIONS, MONTH_OPTIONS};
use tracing::debug;

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
pub const CITY_PROMPT: &str = "Select city to analyze: 1- Chicago, 2- New York City 3- Washington ";
pub const MONTH_PROMPT: &str = "Select Month filter: 1- January, 2- February, 3- March, 4- April, 5- May, 6- June, or 0 no filter ";
pub const DAY_PROMPT: &str = "Select day filter: 1- Saturday, 2- Sunday, 3- Monday, 4- Tuesday, 5- Wednesday, 6- Thursday, 7- Friday, or 0 no filter ";

/// Ask `prompt` until the answer is exactly one of the option keys, then
/// return the mapped value.
pub fn get_user_input<T, R, W>(
    console: &mut crate::Console<R, W>,
    prompt: &str,
    options: &[(&str, T)],
) -> Result<T>
where
    T: Copy,
    R: BufRead,
    W: Write,
{
    loop {
        let answer = console.ask(prompt)?;
        if let Some((_, value)) = options.iter().find(|(key, _)| *key == answer) {
            return Ok(*value);
        }
        debug!("Rejected menu answer {:?}", answer);
    }
}

/// Greet the user and collect the (city, month, day) triple.
pub fn get_filters<R: BufRead, W: Write>(
    console: &mut crate::Console<R, W>,
) -> Result<FilterSelection> {
    writeln!(console.out(), "{}", GREETING)?;
    let city = get_user_input(console, CITY_PROMPT, &CITY_OPTIONS)?;
    let month = get_user_input(console, MONTH_PROMPT, &MONTH_OPTIONS)?;
    let day = get_user_input(console, DAY_PROMPT, &DAY_OPTIONS)?;
    writeln!(console.out(), "{}", separator(40))?;

    Ok(FilterSelection { city, month, day })
}
