//! Utility to run a single unit conversion from the command line
//!
//! Usage: convert_units <quantity> <from_unit> <to_unit> [precision]
//!        convert_units --price <price> <from_unit> <to_unit> [precision]

use kitchen_units::config::Config;
use kitchen_units::conversion::{
    convert_price_per_unit, convert_quantity, format_quantity, round_to_precision, Unit,
};

const USAGE: &str = "usage: convert_units [--price] <value> <from_unit> <to_unit> [precision]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let price_mode = args.first().map(|a| a == "--price").unwrap_or(false);
    if price_mode {
        args.remove(0);
    }

    if args.len() < 3 || args.len() > 4 {
        return Err(USAGE.into());
    }

    let value: f64 = args[0].parse().map_err(|_| format!("invalid number '{}'", args[0]))?;
    let from: Unit = args[1].parse()?;
    let to: Unit = args[2].parse()?;
    let precision = match args.get(3) {
        Some(p) => p.parse().map_err(|_| format!("invalid precision '{}'", p))?,
        None => Config::from_env().display_precision,
    };

    if price_mode {
        let result = convert_price_per_unit(value, from, to)?;
        println!(
            "{} per {} = {} per {}",
            value,
            from,
            round_to_precision(result, precision),
            to
        );
    } else {
        let result = convert_quantity(value, from, to)?;
        println!(
            "{} = {}",
            format_quantity(value, from, precision),
            format_quantity(result, to, precision)
        );
    }

    Ok(())
}
