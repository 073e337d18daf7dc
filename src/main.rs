// vim: set ai et ts=4 sts=4 sw=4:
mod util;
mod error;
mod config;
mod grid;
mod walker;
mod search;
mod ordering;
mod corruption;
mod render;
mod puzzle;

use std::io;
use std::path::{Path, PathBuf};
use std::process;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::{error, info, LevelFilter};

use self::config::Config;
use self::error::{read_input, Result};
use self::puzzle::{Part, Patrol, PrintQueue, RaceTrack, RamRun, Solution};
use self::util::is_a_tty;

fn setup_logging(verbosity: u64) -> std::result::Result<(), log::SetLoggerError> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}][{}] {}", record.level(), record.target(), message))
        })
        .level(level)
        .chain(io::stderr())
        .apply()
}

fn part_args<'a, 'b>(cmd: App<'a, 'b>) -> App<'a, 'b> {
    cmd.arg(Arg::with_name("part1")
                .long("part1")
                .help("Run part one"))
       .arg(Arg::with_name("part2")
                .long("part2")
                .help("Run part two"))
       .arg(Arg::with_name("all")
                .long("all")
                .help("Run both parts (the default)"))
       .arg(Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .value_name("FILE")
                .help("Puzzle input file"))
}

fn cli<'a, 'b>() -> App<'a, 'b> {
    App::new("lattice")
        .about("Grid walking and path search puzzle solvers")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(Arg::with_name("config")
                 .short("c")
                 .long("config")
                 .takes_value(true)
                 .value_name("FILE")
                 .help("YAML settings file"))
        .arg(Arg::with_name("verbose")
                 .short("v")
                 .multiple(true)
                 .help("Increase log verbosity"))
        .subcommand(part_args(SubCommand::with_name("patrol")
                                  .about("Walk the guard until it leaves or loops"))
                        .arg(Arg::with_name("show")
                                 .long("show")
                                 .help("Print the grid with the guard's route")))
        .subcommand(part_args(SubCommand::with_name("race")
                                  .about("Count shortcuts through the race track walls")))
        .subcommand(part_args(SubCommand::with_name("ram-run")
                                  .about("Find paths through falling bytes")))
        .subcommand(part_args(SubCommand::with_name("print-queue")
                                  .about("Check and repair page orderings")))
}

fn selected_parts(matches: &ArgMatches) -> Vec<Part> {
    let one = matches.is_present("part1");
    let two = matches.is_present("part2");
    if matches.is_present("all") || (!one && !two) {
        return vec![Part::One, Part::Two];
    }
    let mut parts = Vec::new();
    if one { parts.push(Part::One); }
    if two { parts.push(Part::Two); }
    parts
}

fn input_path(matches: &ArgMatches, default: &Path) -> PathBuf {
    matches.value_of("input")
           .map(PathBuf::from)
           .unwrap_or_else(|| default.to_path_buf())
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = match matches.value_of("config") {
        Some(path) => Config::load(Path::new(path))?,
        None       => Config::default(),
    };

    let (name, sub) = match matches.subcommand() {
        (name, Some(sub)) => (name, sub),
        _                 => return Ok(()),
    };

    let solution: Box<dyn Solution> = match name {
        "patrol" => {
            let path = input_path(sub, &config.patrol.input);
            let patrol = Patrol::parse(&read_input(&path)?)?;
            if sub.is_present("show") {
                print!("{}", patrol.show(is_a_tty(io::stdout())));
            }
            Box::new(patrol)
        },
        "race" => {
            let path = input_path(sub, &config.race.input);
            Box::new(RaceTrack::parse(&read_input(&path)?, &config.race)?)
        },
        "ram-run" => {
            let path = input_path(sub, &config.ram_run.input);
            Box::new(RamRun::parse(&read_input(&path)?, &config.ram_run))
        },
        "print-queue" => {
            let path = input_path(sub, &config.print_queue.input);
            Box::new(PrintQueue::parse(&read_input(&path)?))
        },
        _ => return Ok(()),
    };

    for part in selected_parts(sub) {
        let answer = solution.solve(part)?;
        println!("{}", answer);
    }
    info!("{} done", solution.name());
    Ok(())
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = setup_logging(matches.occurrences_of("verbose")) {
        eprintln!("cannot initialise logging: {}", e);
    }

    if let Err(e) = run(&matches) {
        error!("{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
