use selflink_config::Config;

#[derive(Debug, Clone)]
pub struct ListInput {
    pub config: Config,
    pub json: bool,
}

/// Strategy for listing the registered functions and their definitions.
#[derive(Debug, Clone, Copy)]
pub struct ListStrategy;

impl super::CommandStrategy for ListStrategy {
    type Input = ListInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let registry = super::build_registry(&input.config)?;
        let definitions = registry.definitions();

        if input.json {
            println!("{}", serde_json::to_string_pretty(&definitions)?);
            return Ok(());
        }

        let width = definitions.iter().map(|d| d.name.len()).max().unwrap_or(0);
        for definition in &definitions {
            let parameters = definition
                .parameters
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            println!(
                "{:<width$}  ({parameters})  {}",
                definition.name, definition.summary
            );
        }
        Ok(())
    }
}
