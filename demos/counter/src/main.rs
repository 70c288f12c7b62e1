use rehook_core::{Runtime, deps};

/// A component is just a closure over the runtime: two state cells and a
/// run-once effect. Setters fired mid-pass land in the store immediately
/// and become visible on the next pass.
fn my_component(rt: &Runtime) {
    let (counter, set_counter) = rt.use_state(|| 1);
    let (submitted, set_submitted) = rt.use_state(|| false);

    rt.use_effect(|| log::info!("effect: mounted"), deps![]);

    log::info!("counter = {counter}");
    log::info!("submitted = {submitted}");

    if counter == 1 {
        set_counter.set(2);
    }
    if !submitted {
        set_submitted.set(true);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let rt = Runtime::new();
    rt.render(|| my_component(&rt))?; // initial render
    rt.render(|| my_component(&rt))?; // simulated re-render
    Ok(())
}
