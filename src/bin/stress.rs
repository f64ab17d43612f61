use clap::Parser;
use log::{error, info};
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use zring::{RingBuffer, RingError};

#[derive(Parser, Debug)]
#[command(name = "stress", about = "Soak the ring against a VecDeque model")]
struct Args {
    /// Ring capacity in bytes
    #[arg(long, default_value_t = 4096)]
    capacity: usize,

    /// Stop after this many seconds (Ctrl+C stops earlier)
    #[arg(long, default_value_t = 5)]
    seconds: u64,
}

#[derive(Debug, Default)]
struct OpCounts {
    put: u64,
    insert: u64,
    get: u64,
    remove: u64,
    read: u64,
    lseek: u64,
    rejected: u64,
}

impl OpCounts {
    fn total(&self) -> u64 {
        self.put + self.insert + self.get + self.remove + self.read + self.lseek + self.rejected
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    println!("zring stress test\n");

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .map_err(|e| format!("Failed to set Ctrl+C handler: {}", e))?;

    let mut storage = vec![0u8; args.capacity];
    let mut ring = RingBuffer::with_storage(&mut storage, args.capacity)?;
    let mut model: VecDeque<u8> = VecDeque::with_capacity(args.capacity);
    let mut peek = 0usize;
    let mut counts = OpCounts::default();

    let deadline = Duration::from_secs(args.seconds);
    let started = Instant::now();
    let mut step = 0u64;
    let mut scratch = vec![0u8; args.capacity];

    println!("Running for {} seconds...", args.seconds);

    while running.load(Ordering::Relaxed) && started.elapsed() < deadline {
        step += 1;
        let len = pseudo_len(step, args.capacity);

        match step % 7 {
            0 | 1 => {
                let chunk: Vec<u8> = (0..len).map(|i| (step as usize + i) as u8).collect();
                match ring.put(&chunk) {
                    Ok(()) => {
                        model.extend(&chunk);
                        counts.put += 1;
                    }
                    Err(e) => expect_rejection(e, chunk.len(), &model, args.capacity, &mut counts)?,
                }
            }
            2 => {
                let chunk: Vec<u8> = (0..len).map(|i| (step as usize ^ i) as u8).collect();
                match ring.insert(&chunk) {
                    Ok(()) => {
                        for &b in chunk.iter().rev() {
                            model.push_front(b);
                        }
                        peek = 0;
                        counts.insert += 1;
                    }
                    Err(e) => expect_rejection(e, chunk.len(), &model, args.capacity, &mut counts)?,
                }
            }
            3 | 4 => match ring.get(&mut scratch[..len]) {
                Ok(n) => {
                    let expected: Vec<u8> = model.drain(..n).collect();
                    check(&scratch[..n] == expected.as_slice(), step, "get returned wrong bytes")?;
                    peek = 0;
                    counts.get += 1;
                }
                Err(RingError::Empty) if model.is_empty() => counts.rejected += 1,
                Err(e) => return Err(e.into()),
            },
            5 => match ring.remove(len) {
                Ok(n) => {
                    check(n == len.min(model.len()), step, "remove count mismatch")?;
                    model.drain(..n);
                    peek = 0;
                    counts.remove += 1;
                }
                Err(RingError::Empty) if model.is_empty() => counts.rejected += 1,
                Err(e) => return Err(e.into()),
            },
            _ => {
                let offset = len as isize - (args.capacity / 2) as isize;
                let position = ring.lseek(offset)?;
                peek = (peek as isize + offset).clamp(0, model.len() as isize) as usize;
                check(position == peek, step, "lseek position mismatch")?;
                counts.lseek += 1;

                match ring.read(&mut scratch[..len]) {
                    Ok(n) => {
                        let expected: Vec<u8> = model.iter().skip(peek).take(len).copied().collect();
                        check(&scratch[..n] == expected.as_slice(), step, "read returned wrong bytes")?;
                        counts.read += 1;
                    }
                    Err(RingError::Empty) if model.is_empty() => counts.rejected += 1,
                    Err(e) => return Err(e.into()),
                }
            }
        }

        check(ring.len() == model.len(), step, "occupancy mismatch")?;
    }

    let elapsed = started.elapsed().as_secs_f64();
    info!("final state: {:?}", ring);

    println!("\nResults:");
    println!("  {:?}", counts);
    println!(
        "  Throughput: {:.2}M ops/sec",
        counts.total() as f64 / elapsed / 1_000_000.0
    );

    Ok(())
}

fn pseudo_len(step: u64, capacity: usize) -> usize {
    let mixed = step.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 40;
    (mixed as usize % capacity.min(512)) + 1
}

fn expect_rejection(
    e: RingError,
    len: usize,
    model: &VecDeque<u8>,
    capacity: usize,
    counts: &mut OpCounts,
) -> Result<(), Box<dyn std::error::Error>> {
    let free = capacity - model.len();
    let expected = match e {
        RingError::Full => free == 0,
        RingError::InsufficientSpace { required, available } => {
            required == len && available == free && free < len
        }
        _ => false,
    };
    if !expected {
        error!("unexpected write failure: {} (free {}, len {})", e, free, len);
        return Err(e.into());
    }
    counts.rejected += 1;
    Ok(())
}

fn check(ok: bool, step: u64, what: &str) -> Result<(), Box<dyn std::error::Error>> {
    if ok {
        Ok(())
    } else {
        Err(format!("step {}: {}", step, what).into())
    }
}
