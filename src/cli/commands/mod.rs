pub mod budget;
pub mod fields;
pub mod preferences;
pub mod system;

use crate::cli::registry::CommandRegistry;

pub fn register_all(registry: &mut CommandRegistry) {
    for entry in budget::definitions()
        .into_iter()
        .chain(fields::definitions())
        .chain(preferences::definitions())
        .chain(system::definitions())
    {
        registry.register(entry);
    }
}
