/*
 * mypoke.rs - A handy routine for watching msleep absorb interruptions
 *
 * usage: mypoke <ms> <every-ms>
 * Sleeps for <ms> milliseconds while another thread sends SIGUSR1 to the
 * sleeping thread every <every-ms> milliseconds, then reports the elapsed
 * time and how many times the wait was resumed.
 */

use msleep::signals::{install_wakeup_handler, poke};
use msleep::{Interval, Nanosleep};
use nix::sys::pthread::pthread_self;
use std::env;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: {} <ms> <every-ms>", msleep::utils::program_name(&args));
        process::exit(1);
    }

    let millis = msleep::parse_millis(&args[1]).unwrap_or_else(|err| {
        eprintln!("Error: {}", err);
        process::exit(1);
    });
    let every = msleep::parse_millis(&args[2]).unwrap_or_else(|err| {
        eprintln!("Error: {}", err);
        process::exit(1);
    });
    if every == 0 {
        eprintln!("Error: <every-ms> must be a positive integer");
        process::exit(1);
    }

    if let Err(err) = install_wakeup_handler() {
        eprintln!("signal handler error: {}", err);
        process::exit(1);
    }

    let sleeper = pthread_self();
    let done = Arc::new(AtomicBool::new(false));
    let poker = {
        let done = Arc::clone(&done);
        thread::spawn(move || loop {
            thread::sleep(Duration::from_millis(every));
            if done.load(Ordering::SeqCst) {
                break;
            }
            if let Err(err) = poke(sleeper) {
                eprintln!("kill (usr1) error: {}", err);
                break;
            }
        })
    };

    let requested = Interval::from_millis(millis);
    let start = Instant::now();
    let result = msleep::wait_with(&mut Nanosleep, requested);
    let elapsed = start.elapsed();

    done.store(true, Ordering::SeqCst);
    if poker.join().is_err() {
        eprintln!("poker thread panicked");
    }

    match result {
        Ok(interruptions) => {
            println!(
                "slept {} ms across {} interruptions (asked for {:?})",
                elapsed.as_millis(),
                interruptions,
                Duration::from(requested)
            );
            process::exit(0);
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    }
}
