//! The command table: every slash command the bot exposes, with its options,
//! whether it needs the administrator capability, and the function that runs it.

use super::dispatcher::Dispatcher;
use super::invocation::Invocation;
use super::{admin, emojis, view};
use crate::database::models::Category;
use crate::error::Result;
use crate::ui::reply::Reply;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::CommandOptionType;
use serenity::model::permissions::Permissions;

pub type CommandFn = Box<dyn Fn(&Dispatcher, &Invocation) -> Result<Reply> + Send + Sync>;

const CATEGORY_HELP: &str = "Category (streaming, gaming, vpn, accounts, codes, outofstock)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Text,
    Number,
}

#[derive(Debug, Clone)]
pub struct OptionSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: OptionKind,
    pub required: bool,
    pub min_value: Option<f64>,
}

impl OptionSpec {
    fn text(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            kind: OptionKind::Text,
            required: true,
            min_value: None,
        }
    }

    fn price(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            kind: OptionKind::Number,
            required: true,
            min_value: Some(0.0),
        }
    }

    fn to_create_option(&self) -> CreateCommandOption {
        let kind = match self.kind {
            OptionKind::Text => CommandOptionType::String,
            OptionKind::Number => CommandOptionType::Number,
        };
        let mut option = CreateCommandOption::new(kind, self.name, self.description)
            .required(self.required);
        if let Some(min) = self.min_value {
            option = option.min_number_value(min);
        }
        option
    }
}

pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub options: Vec<OptionSpec>,
    /// Requires the administrator capability; checked before any store access.
    pub admin_only: bool,
    pub handler: CommandFn,
}

impl CommandSpec {
    fn new(
        name: &'static str,
        description: &'static str,
        admin_only: bool,
        handler: impl Fn(&Dispatcher, &Invocation) -> Result<Reply> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            description,
            options: Vec::new(),
            admin_only,
            handler: Box::new(handler),
        }
    }

    fn option(mut self, option: OptionSpec) -> Self {
        self.options.push(option);
        self
    }

    pub fn to_create_command(&self) -> CreateCommand {
        let mut command = CreateCommand::new(self.name).description(self.description);
        for option in &self.options {
            command = command.add_option(option.to_create_option());
        }
        if self.admin_only {
            // Hides the command from non-admins in the client; the runtime gate still applies.
            command = command.default_member_permissions(Permissions::ADMINISTRATOR);
        }
        command
    }
}

impl std::fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("options", &self.options)
            .field("admin_only", &self.admin_only)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct CommandTable {
    commands: Vec<CommandSpec>,
}

impl CommandTable {
    /// The full command set, built once at startup.
    pub fn standard() -> Self {
        let mut commands: Vec<CommandSpec> = Category::ALL
            .into_iter()
            .map(|category| {
                CommandSpec::new(
                    category.as_str(),
                    category.command_description(),
                    false,
                    move |d, _| view::run_category(d, category),
                )
            })
            .collect();

        commands.push(CommandSpec::new(
            "all",
            "View all available items",
            false,
            view::run_all,
        ));
        commands.push(
            CommandSpec::new(
                "add",
                "Add an item to inventory (Admin only)",
                true,
                admin::run_add,
            )
            .option(OptionSpec::text("category", CATEGORY_HELP))
            .option(OptionSpec::text("name", "Item name"))
            .option(OptionSpec::price("price", "Price in USD (use 0 for TBA)")),
        );
        commands.push(
            CommandSpec::new(
                "remove",
                "Remove an item from inventory (Admin only)",
                true,
                admin::run_remove,
            )
            .option(OptionSpec::text("category", CATEGORY_HELP))
            .option(OptionSpec::text("name", "Item name to remove")),
        );
        commands.push(
            CommandSpec::new("edit", "Edit item price (Admin only)", true, admin::run_edit)
                .option(OptionSpec::text("category", CATEGORY_HELP))
                .option(OptionSpec::text("name", "Item name"))
                .option(OptionSpec::price(
                    "new_price",
                    "New price in USD (use 0 for TBA)",
                )),
        );
        commands.push(CommandSpec::new(
            "reload",
            "Reload inventory from file (Admin only)",
            true,
            admin::run_reload,
        ));
        commands.push(CommandSpec::new(
            "list_emojis",
            "Get the codes for all server emojis (Admin only)",
            true,
            emojis::run_list,
        ));

        Self { commands }
    }

    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|c| c.name).collect()
    }

    /// Builders for registering the whole table with Discord.
    pub fn create_commands(&self) -> Vec<CreateCommand> {
        self.commands.iter().map(CommandSpec::to_create_command).collect()
    }
}
