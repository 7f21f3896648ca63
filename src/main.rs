// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tunesmith::config::Settings;
use tunesmith::export::MidiExport;
use tunesmith::generate::MelodyGenerator;
use tunesmith::mood::Mood;
use tunesmith::music::chord::Chord;
use tunesmith::playback::{beats_to_seconds, PlaybackMode, Schedule};

fn print_usage() {
    println!("Tunesmith - procedural melody generator");
    println!();
    println!("Usage: tunesmith [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --mood <NAME>     Mood to pick a progression for (default: euphoric)");
    println!("  --chords <LIST>   Comma-separated chord symbols (overrides --mood)");
    println!("  --seed <N>        Seed the generator for reproducible output");
    println!("  --tempo <BPM>     Tempo for export and timing summary (default: 120)");
    println!("  --mode <MODE>     Playback plan to summarize: both, chords, melody");
    println!("  --config <FILE>   Load settings from a YAML file");
    println!("  --export <FILE>   Write the result as a Standard MIDI File");
    println!("  --list-moods      List available moods");
    println!("  --help            Show this help message");
}

fn list_moods() {
    println!("Available moods:");
    for mood in Mood::ALL {
        let progressions = mood.progressions();
        println!("  {:10} {} progressions", mood, progressions.len());
    }
}

fn parse_chord_list(list: &str) -> Result<Vec<Chord>> {
    list.split(',')
        .map(|symbol| {
            symbol
                .trim()
                .parse::<Chord>()
                .map_err(|e| anyhow!(e).context(format!("in chord list {:?}", list)))
        })
        .collect()
}

struct CliArgs {
    mood: Option<Mood>,
    chords: Option<Vec<Chord>>,
    seed: Option<u64>,
    tempo: Option<f64>,
    mode: PlaybackMode,
    config: Option<PathBuf>,
    export: Option<PathBuf>,
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(|s| s.as_str())
        .ok_or_else(|| anyhow!("{} requires a value", flag))
}

fn parse_args(args: &[String]) -> Result<Option<CliArgs>> {
    let mut cli = CliArgs {
        mood: None,
        chords: None,
        seed: None,
        tempo: None,
        mode: PlaybackMode::Both,
        config: None,
        export: None,
    };

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();

        match flag {
            "--mood" => {
                cli.mood = Some(flag_value(args, i, flag)?.parse()?);
                i += 2;
            }
            "--chords" => {
                cli.chords = Some(parse_chord_list(flag_value(args, i, flag)?)?);
                i += 2;
            }
            "--seed" => {
                let raw = flag_value(args, i, flag)?;
                cli.seed = Some(
                    raw.parse()
                        .map_err(|_| anyhow!("Invalid seed: {}", raw))?,
                );
                i += 2;
            }
            "--tempo" => {
                let raw = flag_value(args, i, flag)?;
                cli.tempo = Some(
                    raw.parse()
                        .map_err(|_| anyhow!("Invalid tempo: {}", raw))?,
                );
                i += 2;
            }
            "--mode" => {
                cli.mode = flag_value(args, i, flag)?.parse()?;
                i += 2;
            }
            "--config" => {
                cli.config = Some(PathBuf::from(flag_value(args, i, flag)?));
                i += 2;
            }
            "--export" => {
                cli.export = Some(PathBuf::from(flag_value(args, i, flag)?));
                i += 2;
            }
            "--list-moods" => {
                list_moods();
                return Ok(None);
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            other => {
                return Err(anyhow!("Unknown option: {}", other));
            }
        }
    }

    Ok(Some(cli))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = env::args().collect();
    let cli = match parse_args(&args) {
        Ok(Some(cli)) => cli,
        Ok(None) => return Ok(()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            eprintln!("Run with --help for usage information");
            std::process::exit(1);
        }
    };

    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(mood) = cli.mood {
        settings.mood = mood;
    }
    if let Some(seed) = cli.seed {
        settings.seed = Some(seed);
    }
    if let Some(tempo) = cli.tempo {
        settings.tempo = tempo;
    }
    if let Some(path) = cli.export {
        settings.output = Some(path);
    }

    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let progression: Vec<Chord> = match cli.chords {
        Some(chords) => chords,
        None => settings.mood.pick_progression(&mut rng).to_vec(),
    };
    if progression.is_empty() {
        return Err(anyhow!("Chord progression is empty"));
    }

    let mut generator = MelodyGenerator::with_rng(progression.clone(), rng);
    let melody = generator.generate();

    let symbols: Vec<String> = progression.iter().map(|c| c.to_string()).collect();
    println!("Chord progression: {} (played twice)", symbols.join(" - "));

    let notes: Vec<String> = melody.iter().map(|n| n.to_string()).collect();
    println!("Melody ({} notes): {}", melody.len(), notes.join(", "));

    let schedule = Schedule::build(&progression, &melody, cli.mode);
    println!(
        "Playback plan ({}): {} chord events, {} melody events, {:.2} beats ({:.1}s at {} BPM)",
        cli.mode,
        schedule.chords.len(),
        schedule.melody.len(),
        schedule.total_beats(),
        beats_to_seconds(schedule.total_beats(), settings.tempo),
        settings.tempo,
    );

    if let Some(path) = &settings.output {
        MidiExport::new(&progression, &melody)
            .with_tempo(settings.tempo)
            .save(path)
            .with_context(|| format!("Failed to write MIDI file: {:?}", path))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}
