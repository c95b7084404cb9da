use log::{debug, info, warn};
use optval::Opt;

/// First command line argument, absent when the demo is run bare.
///
/// This is the kind of value `Opt` exists for: there is no `String` that can
/// stand in for "no argument was given" without colliding with real input.
fn first_arg() -> Opt<String> {
    std::env::args().nth(1).into()
}

fn main() {
    env_logger::init();

    let name = first_arg();
    debug!("argument state: {}", name);

    let greeting = name.map(|who| format!("hello, {}", who));
    info!(
        "{}",
        greeting.unwrap_or_else(|| String::from("hello, whoever you are"))
    );

    // The fallible extraction path, for callers that want the error as a value.
    match first_arg().try_unwrap() {
        Ok(who) => info!("unwrapped argument: {}", who),
        Err(err) => warn!("{}", err),
    }
}
