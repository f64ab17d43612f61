use clap::Parser;
use log::{error, info};
use zring::RingBuffer;
use zring::storage::MappedRegion;

#[derive(Parser, Debug)]
#[command(name = "zring", about = "Ring buffer put/get/peek walkthrough")]
struct Args {
    /// Ring capacity in bytes
    #[arg(long, default_value_t = 1024)]
    capacity: usize,

    /// Number of put/get/read rounds
    #[arg(long, default_value_t = 10)]
    rounds: usize,

    /// Back the ring with an anonymous mapping instead of a heap buffer
    #[arg(long)]
    mapped: bool,

    /// Pin the mapping in RAM (implies --mapped)
    #[arg(long)]
    lock: bool,
}

const CHUNK: usize = 128;
const TAKE: usize = 50;

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    println!("zring v{}", env!("CARGO_PKG_VERSION"));

    if args.mapped || args.lock {
        let mut region = MappedRegion::anonymous(args.capacity)?;
        if args.lock {
            region.lock()?;
        }
        info!(
            "using mapped storage: {} bytes ({} mapped)",
            region.len(),
            region.mapped_len()
        );
        walkthrough(region.as_mut_slice(), &args)
    } else {
        let mut cache = vec![0u8; args.capacity];
        info!("using heap storage: {} bytes", cache.len());
        walkthrough(&mut cache, &args)
    }
}

fn walkthrough(cache: &mut [u8], args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut ring = RingBuffer::new();
    ring.init(cache, args.capacity)?;

    let chunk: Vec<u8> = (0..CHUNK).map(|i| i as u8).collect();
    let mut data = vec![0u8; args.capacity];

    for round in 0..args.rounds {
        println!("Round : {}", round);

        if let Err(e) = ring.put(&chunk) {
            error!("round {}: put failed: {}", round, e);
            break;
        }

        let taken = ring.get(&mut data[..TAKE.min(args.capacity)])?;
        print_data(&data[..taken]);

        let remaining = ring.remaining();
        println!("Remain Size : {}", remaining);

        data.fill(0);
        let peeked = ring.read(&mut data)?;
        print_data(&data[..peeked]);
    }

    info!("finished with {:?}", ring);
    Ok(())
}

fn print_data(data: &[u8]) {
    if data.is_empty() {
        return;
    }

    println!("Data : ");
    for line in data.chunks(16) {
        let row: Vec<String> = line.iter().map(|b| format!("0x{:x}", b)).collect();
        println!("  {}", row.join(" "));
    }
}
