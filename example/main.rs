use spiral::driver::ManualTicks;
use spiral::{AnimationDriverBuilder, DriverEvent, ParamKey, ParameterStore, SvgSurface};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let store = ParameterStore::default();
    let controls = store.clone();

    #[allow(clippy::unwrap_used)]
    let mut driver = AnimationDriverBuilder::new().store(store).build().unwrap();
    let mut surface = SvgSurface::new(600., 600.);

    // a scripted slider session
    let script = [
        (10, DriverEvent::ParamChange { key: ParamKey::Arms, raw: String::from("5") }),
        (20, DriverEvent::ParamChange { key: ParamKey::NoiseAmp, raw: String::from("0.4") }),
        (30, DriverEvent::Toggle),
        (40, DriverEvent::ParamChange { key: ParamKey::Color2, raw: String::from("#f97316") }),
    ];

    driver.run(&mut ManualTicks::new(60), &mut surface, |tick| {
        script
            .iter()
            .filter(|(at, _)| *at == tick)
            .map(|(_, event)| event.clone())
            .collect::<Vec<_>>()
    });

    let snapshot = controls.get();
    for key in ParamKey::ALL {
        eprintln!("{key}: {}", key.format_value(&snapshot.value(key)));
    }
    eprintln!("button: {}", driver.state().control_label());

    println!("{}", surface.document());
}
