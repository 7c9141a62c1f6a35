use std::{env, process::ExitCode};

use argfetch::{FetchResult, fetch, fetch_from};

fn usage() {
    println!("\nUsage: argfetch [options]\n");
    println!("Options:");
    println!("\t-h (--help) <flag>");
    println!("\t-n (--name) <string>");
    println!("\t--nums <4x f64>");
    println!("\t--arb <i64>...");
    println!("\t--mix <f64 f64 string>");
    println!("\t-c <char>");
    println!("\t-d <f64>\n");
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> FetchResult<()> {
    let mut help = false;
    fetch(args, "-h", &mut help)?;
    fetch(args, "--help", &mut help)?;
    if help {
        usage();
        return Ok(());
    }

    // multiple identifiers for the same option are separate calls; the
    // found flag says whether any spelling matched
    let mut name = String::new();
    let found = fetch(args, "-n", &mut name)? || fetch(args, "--name", &mut name)?;
    if found {
        println!("Hello {name}");
    }

    // pre-sized: exactly four values
    let mut nums = vec![0.0_f64; 4];
    if fetch(args, "--nums", &mut nums)? {
        println!("Numbers: {} {} {} {}", nums[0], nums[1], nums[2], nums[3]);
    }

    // auto-sized: as many values as appear before the next option
    let mut arb: Vec<i64> = Vec::new();
    if fetch(args, "--arb", &mut arb)? {
        let rendered: Vec<String> = arb.iter().map(ToString::to_string).collect();
        println!("Arbitrary: {}", rendered.join(" "));
    }

    // mixed types read into a tuple of slots
    let (mut b, mut c) = (0.0_f64, 0.0_f64);
    let mut s = "default".to_owned();
    if fetch(args, "--mix", (&mut b, &mut c, &mut s))? {
        println!("Mix: {b} {c} {s}");
    }

    let mut ch = ' ';
    if fetch(args, "-c", &mut ch)? {
        println!("Char: {ch}");
    }

    // reading straight off the process argument stream
    let mut d = 0.0_f64;
    if fetch_from(env::args(), "-d", &mut d)? {
        println!("Direct: {d}");
    }

    Ok(())
}
