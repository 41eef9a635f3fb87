use std::env;
use ch_sim::{
    chform::StabState,
    error::ChResult,
    gate::{ Composite, Gate },
};

fn main() -> ChResult<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn")
    ).init();

    let n: usize
        = env::args().nth(1)
        .and_then(|arg| arg.parse().ok())
        .filter(|n| *n > 0)
        .unwrap_or(3);

    let mut state = StabState::new(n);
    println!("t=0");
    println!("{}", state);
    println!("{}", state.as_kets());

    let ghz: Composite
        = Composite::from(Gate::H(0))
        .then((1..n).map(|k| Gate::CX(k, k - 1)).collect::<Composite>());
    println!("{}", ghz);
    ghz.apply(&mut state)?;
    println!("t=1");
    println!("{}", state);
    println!("{}", state.as_kets());

    (0..n).try_for_each(|k| state.apply_h(k).map(|_| ()))?;
    println!("t=2");
    println!("{}", state);
    println!("{}", state.as_kets());
    Ok(())
}
