use spiral::driver::{IntervalTicks, ManualTicks, TickSource};
use spiral::{AnimationDriverBuilder, DriverEvent, ParameterStore, SpiralError, SvgSurface};
use std::env::args;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

struct Options {
    frames: u64,
    fps: u32,
    width: f64,
    height: f64,
    sets: Vec<(String, String)>,
    pause_at: Option<u64>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            frames: 120,
            fps: 60,
            width: 800.,
            height: 600.,
            sets: Vec::new(),
            pause_at: None,
        }
    }
}

fn invalid(msg: String) -> SpiralError {
    SpiralError::InvalidArgument(msg)
}

fn value_of(flag: &str, value: Option<String>) -> Result<String, SpiralError> {
    value.ok_or_else(|| invalid(format!("{flag} needs a value")))
}

fn number<T: std::str::FromStr>(flag: &str, raw: &str) -> Result<T, SpiralError> {
    raw.parse()
        .map_err(|_| invalid(format!("{flag}: not a number: {raw}")))
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<Options, SpiralError> {
    let mut options = Options::default();

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--frames" => options.frames = number(&flag, &value_of(&flag, args.next())?)?,
            "--fps" => options.fps = number(&flag, &value_of(&flag, args.next())?)?,
            "--pause-at" => {
                options.pause_at = Some(number(&flag, &value_of(&flag, args.next())?)?)
            }
            "--size" => {
                let raw = value_of(&flag, args.next())?;
                let (w, h) = raw
                    .split_once('x')
                    .ok_or_else(|| invalid(format!("--size expects WxH, got {raw}")))?;
                options.width = number(&flag, w)?;
                options.height = number(&flag, h)?;
            }
            "--set" => {
                let raw = value_of(&flag, args.next())?;
                let (key, value) = raw
                    .split_once('=')
                    .ok_or_else(|| invalid(format!("--set expects key=value, got {raw}")))?;
                options.sets.push((String::from(key), String::from(value)));
            }
            other => return Err(invalid(format!("unknown flag {other}"))),
        }
    }

    Ok(options)
}

fn run(options: Options) -> Result<(), SpiralError> {
    let store = ParameterStore::default();
    for (key, value) in &options.sets {
        store.set_by_name(key, value)?;
    }
    for failed in store.get().check() {
        warn!(invariant = failed, "parameter sanity check failed, rendering clamped values");
    }

    let mut driver = AnimationDriverBuilder::new().store(store).build()?;
    let mut surface = SvgSurface::new(options.width, options.height);
    let mut ticks: Box<dyn TickSource> = match options.fps {
        0 => Box::new(ManualTicks::new(options.frames)),
        fps => Box::new(IntervalTicks::per_second(fps).limit(options.frames)),
    };

    info!(frames = options.frames, fps = options.fps, "animating");
    let pause_at = options.pause_at;
    driver.run(ticks.as_mut(), &mut surface, |tick| {
        (Some(tick) == pause_at).then_some(DriverEvent::Toggle)
    });
    info!(
        phase = driver.phase().value(),
        state = driver.state().control_label(),
        "done"
    );

    println!("{}", surface.document());
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match parse_options(args().skip(1)).and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "spiral failed");
            ExitCode::FAILURE
        }
    }
}
