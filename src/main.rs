use std::env;
use std::process;

use log::{error, info};
use simple_logger::SimpleLogger;

use md1_sim::{SimConfig, Simulation};

fn parse_args(args: &[String]) -> Result<SimConfig, String> {
    if args.len() < 4 || args.len() > 5 {
        return Err(format!(
            "usage: {} TICKS ARRIVAL_RATE SERVICE_TIME [SEED]",
            args.first().map(String::as_str).unwrap_or("md1_sim")
        ));
    }

    let ticks = args[1]
        .parse::<u64>()
        .map_err(|e| format!("bad TICKS '{}': {}", args[1], e))?;
    let arrival_rate = args[2]
        .parse::<f64>()
        .map_err(|e| format!("bad ARRIVAL_RATE '{}': {}", args[2], e))?;
    let service_time = args[3]
        .parse::<f64>()
        .map_err(|e| format!("bad SERVICE_TIME '{}': {}", args[3], e))?;
    //seed defaults to 0 so bare invocations stay reproducible
    let seed = match args.get(4) {
        Some(s) => s
            .parse::<u64>()
            .map_err(|e| format!("bad SEED '{}': {}", s, e))?,
        None => 0,
    };

    Ok(SimConfig {
        ticks,
        arrival_rate,
        service_time,
        seed,
    })
}

fn main() {
    SimpleLogger::new().init().unwrap();

    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("{}", msg);
            process::exit(2);
        }
    };

    info!(
        "starting: ticks={} arrival_rate={} service_time={} seed={}",
        config.ticks, config.arrival_rate, config.service_time, config.seed
    );

    match Simulation::new(config).and_then(|mut sim| sim.run()) {
        Ok(report) => println!("{}", report),
        Err(e) => {
            error!("simulation failed: {}", e);
            process::exit(1);
        }
    }
}
