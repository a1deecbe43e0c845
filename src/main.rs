use log::info;
use profile_host::config::load_config_or_default;
use profile_host::logging::init_logging;
use profile_host::modules::registry::ModuleRegistry;
use profile_host::profile::ProfileManager;
use profile_host::specific_handler::SpecificHandler;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.yaml".to_string());
    let config = load_config_or_default(&config_path)?;
    let _logger = init_logging(&config)?;
    info!("Loaded config: {:?}", config);

    let registry = ModuleRegistry::with_builtin();
    info!("Registered profiles: {}", registry.names().join(", "));

    let pm = ProfileManager::new(&registry, &config)?;
    let handler = SpecificHandler::new(&pm);

    println!("{}", handler.specific_method());
    match handler.spec_meth_int_res(100.345) {
        Some(res) => println!("true res = {}", res),
        None => println!("false"),
    }

    pm.kill_instance()?;
    println!("{}", handler.spec_meth_void_res(100));
    Ok(())
}
