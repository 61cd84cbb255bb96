// This file is part of the numtheory package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// spell-checker:ignore (math) coprime coprimality

#[macro_use]
extern crate uucore;

use std::io::{self, BufRead, Write};

use clap::{crate_version, Command};
use num_bigint::BigInt;
use uucore::display::Quotable;
use uucore::error::UResult;

pub mod errors;
pub mod numeric;

use crate::numeric::{gcd, is_coprime, lcm, modular_exponentiation, modular_inverse};

static ABOUT: &str = "Interactively evaluate elementary number-theory operations
(GCD, LCM, coprimality, modular exponentiation, modular inverse).";

static MENU: &str = "\nChoose an operation:
1. GCD (Greatest Common Divisor)
2. LCM (Least Common Multiple)
3. Coprimality Check
4. Modular Exponentiation
5. Modular Inverse (Extended Euclidean Algorithm)
6. Exit";

#[uucore::main]
pub fn uumain(args: impl uucore::Args) -> UResult<()> {
    uu_app().try_get_matches_from(args)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock())
}

pub fn uu_app() -> Command {
    Command::new(uucore::util_name())
        .version(crate_version!())
        .about(ABOUT)
        .infer_long_args(true)
}

/// Drives the menu loop until the exit choice or end of input.
///
/// Prompts and results go to `out`; malformed input is reported on stderr
/// and never ends the session.
pub fn run_session(mut input: impl BufRead, mut out: impl Write) -> UResult<()> {
    loop {
        writeln!(out, "{MENU}")?;
        write!(out, "Enter your choice (1-6): ")?;
        out.flush()?;

        let Some(choice) = read_trimmed_line(&mut input)? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                let Some((a, b)) = read_operand_pair(&mut input, &mut out)? else {
                    return Ok(());
                };
                writeln!(out, "GCD of {} and {} is {}", a, b, gcd(&a, &b))?;
            }
            "2" => {
                let Some((a, b)) = read_operand_pair(&mut input, &mut out)? else {
                    return Ok(());
                };
                match lcm(&a, &b) {
                    Ok(l) => writeln!(out, "LCM of {} and {} is {}", a, b, l)?,
                    Err(e) => show_error!("{}", e),
                }
            }
            "3" => {
                let Some((a, b)) = read_operand_pair(&mut input, &mut out)? else {
                    return Ok(());
                };
                let verdict = if is_coprime(&a, &b) {
                    "coprime"
                } else {
                    "not coprime"
                };
                writeln!(out, "{} and {} are {}.", a, b, verdict)?;
            }
            "4" => {
                let Some(base) = read_integer(&mut input, &mut out, "Enter the base: ")? else {
                    return Ok(());
                };
                let Some(exponent) = read_integer(&mut input, &mut out, "Enter the exponent: ")?
                else {
                    return Ok(());
                };
                let Some(modulus) = read_integer(&mut input, &mut out, "Enter the modulus: ")?
                else {
                    return Ok(());
                };
                match modular_exponentiation(&base, &exponent, &modulus) {
                    Ok(r) => writeln!(out, "({}^{}) % {} = {}", base, exponent, modulus, r)?,
                    Err(e) => show_error!("{}", e),
                }
            }
            "5" => {
                let Some(a) = read_integer(&mut input, &mut out, "Enter the number: ")? else {
                    return Ok(());
                };
                let Some(m) = read_integer(&mut input, &mut out, "Enter the modulus: ")? else {
                    return Ok(());
                };
                match modular_inverse(&a, &m) {
                    Ok(Some(x)) => {
                        writeln!(out, "The modular inverse of {} under modulo {} is {}", a, m, x)?;
                    }
                    Ok(None) => {
                        writeln!(out, "No modular inverse exists for {} under modulo {}.", a, m)?;
                    }
                    Err(e) => show_error!("{}", e),
                }
            }
            "6" => {
                writeln!(out, "Exiting the program. Goodbye!")?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid choice. Please enter a number between 1 and 6.")?,
        }
    }
}

fn read_operand_pair(
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> UResult<Option<(BigInt, BigInt)>> {
    let Some(a) = read_integer(input, out, "Enter the first number: ")? else {
        return Ok(None);
    };
    let Some(b) = read_integer(input, out, "Enter the second number: ")? else {
        return Ok(None);
    };
    Ok(Some((a, b)))
}

/// Prompts until a parsable integer arrives; `None` means end of input.
fn read_integer(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> UResult<Option<BigInt>> {
    loop {
        write!(out, "{prompt}")?;
        out.flush()?;
        let Some(line) = read_trimmed_line(input)? else {
            return Ok(None);
        };
        match line.parse::<BigInt>() {
            Ok(n) => return Ok(Some(n)),
            Err(_) => show_error!("invalid integer {}", line.quote()),
        }
    }
}

fn read_trimmed_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(line.trim().to_string()))
    }
}
