//! Dice expression scaling

use crate::error::{LayoutError, Result};

/// Multiply a dice expression by a whole-number factor.
///
/// Plain integers scale directly, so `"4"` times 3 is `"12"`. A roll
/// of the form `NdM` or `NdM+K` scales the die count and the bonus but
/// keeps the die size, so `"2d6+1"` times 3 is `"6d6+3"`. The `d` may
/// be either case and the expression may sit inside a longer string.
/// Anything else is a format error.
pub fn multiply_dice(dice: &str, factor: i64) -> Result<String> {
    if let Ok(value) = dice.parse::<i64>() {
        return Ok((value * factor).to_string());
    }

    let captures = regex_lite::Regex::new(r"(?i)(\d+)d(\d+)(?:\+(\d+))?")
        .ok()
        .and_then(|re| re.captures(dice))
        .ok_or_else(|| {
            LayoutError::Format(format!("{} does not represent a valid dice roll", dice))
        })?;

    let number = |text: &str| -> Result<i64> {
        text.parse().map_err(|_| {
            LayoutError::Format(format!("{} does not represent a valid dice roll", dice))
        })
    };

    let count = number(&captures[1])? * factor;
    let size = number(&captures[2])?;
    let mut scaled = format!("{}d{}", count, size);
    if let Some(bonus) = captures.get(3) {
        scaled.push_str(&format!("+{}", number(bonus.as_str())? * factor));
    }
    Ok(scaled)
}
