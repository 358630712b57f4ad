//! Line-oriented command shell driving an [`InventoryApp`].

use std::io::{BufRead, Write};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use stockroom_core::{FormField, InventoryError, ProductId};
use stockroom_desktop::{InventoryApp, ViewUpdate};

use crate::render;

pub const HELP: &str = "\
comandos:
  list                 tabla de productos (filtrada)
  stats                estadísticas de inventario
  categories           categorías disponibles
  search [texto]       filtrar por nombre o SKU (vacío = sin filtro)
  category [nombre]    filtrar por categoría (vacío = todas)
  new                  abrir formulario para agregar
  edit <id>            abrir formulario para editar
  set <campo> [valor]  completar un campo del formulario
  form                 mostrar el formulario abierto
  save                 guardar el formulario
  cancel               cerrar el formulario sin guardar
  delete <id>          eliminar un producto
  help                 esta ayuda
  quit                 salir";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Stats,
    Categories,
    Search(String),
    Category(String),
    New,
    Edit(ProductId),
    Set(FormField, String),
    Form,
    Save,
    Cancel,
    Delete(ProductId),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("unknown command `{0}` (try `help`)")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

impl ShellError {
    /// Text printed for the user.
    pub fn user_message(&self) -> String {
        match self {
            ShellError::Inventory(InventoryError::Validation(e)) => {
                format!("{} ({})", e.user_message(), e.field)
            }
            ShellError::Inventory(InventoryError::NotFound(id)) => {
                format!("Producto {id} no encontrado")
            }
            other => other.to_string(),
        }
    }
}

impl std::str::FromStr for ShellCommand {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match word {
            "list" | "ls" => ShellCommand::List,
            "stats" => ShellCommand::Stats,
            "categories" => ShellCommand::Categories,
            "search" => ShellCommand::Search(rest.to_string()),
            "category" => ShellCommand::Category(rest.to_string()),
            "new" | "add" => ShellCommand::New,
            "edit" => ShellCommand::Edit(parse_id(rest, "edit <id>")?),
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err(ShellError::Usage("set <campo> [valor]"));
                }
                ShellCommand::Set(field.parse()?, value.trim().to_string())
            }
            "form" => ShellCommand::Form,
            "save" => ShellCommand::Save,
            "cancel" => ShellCommand::Cancel,
            "delete" | "rm" => ShellCommand::Delete(parse_id(rest, "delete <id>")?),
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => return Err(ShellError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}

fn parse_id(input: &str, usage: &'static str) -> Result<ProductId, ShellError> {
    if input.is_empty() {
        return Err(ShellError::Usage(usage));
    }
    Ok(input.parse()?)
}

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    app: InventoryApp,
    json: bool,
}

impl Shell {
    pub fn new(app: InventoryApp, json: bool) -> Self {
        Self { app, json }
    }

    pub fn app(&self) -> &InventoryApp {
        &self.app
    }

    /// Read commands until EOF or `quit`. Command errors are printed, not returned.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> anyhow::Result<()> {
        writeln!(out, "{}", render::stats_table(&self.app))?;
        writeln!(out, "{}", render::products_table(&self.app.table()))?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let outcome = line
                .parse::<ShellCommand>()
                .and_then(|command| self.execute(command, out));
            match outcome {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(err) => writeln!(out, "error: {}", err.user_message())?,
            }
        }
        Ok(())
    }

    pub fn execute<W: Write>(
        &mut self,
        command: ShellCommand,
        out: &mut W,
    ) -> Result<Flow, ShellError> {
        debug!(?command, "shell command");
        let update = match command {
            ShellCommand::List => {
                self.print_table(out);
                return Ok(Flow::Continue);
            }
            ShellCommand::Stats => {
                self.print_stats(out);
                return Ok(Flow::Continue);
            }
            ShellCommand::Categories => {
                self.print_categories(out);
                return Ok(Flow::Continue);
            }
            ShellCommand::Form => {
                self.print_form(out);
                return Ok(Flow::Continue);
            }
            ShellCommand::Help => {
                print_line(out, HELP);
                return Ok(Flow::Continue);
            }
            ShellCommand::Quit => return Ok(Flow::Quit),
            ShellCommand::Search(text) => self.app.set_search_term(text),
            ShellCommand::Category(name) => self.app.set_category_filter(name),
            ShellCommand::New => self.app.begin_add(),
            ShellCommand::Edit(id) => self.app.begin_edit(id)?,
            ShellCommand::Set(field, value) => self.app.set_form_field(field, value)?,
            ShellCommand::Save => self.app.save_draft()?,
            ShellCommand::Cancel => self.app.cancel_edit(),
            ShellCommand::Delete(id) => self.app.delete_product(id)?,
        };
        self.redraw(update, out);
        Ok(Flow::Continue)
    }

    /// Redraw whatever the command made stale.
    fn redraw<W: Write>(&self, update: ViewUpdate, out: &mut W) {
        if update.stats {
            self.print_stats(out);
        }
        if update.table {
            self.print_table(out);
        }
        if update.form && self.app.form().is_open() {
            self.print_form(out);
        }
    }

    fn print_table<W: Write>(&self, out: &mut W) {
        if self.json {
            print_json(out, &self.app.table());
        } else {
            print_line(out, &render::products_table(&self.app.table()));
        }
    }

    fn print_stats<W: Write>(&self, out: &mut W) {
        if self.json {
            print_json(out, self.app.stats());
        } else {
            print_line(out, &render::stats_table(&self.app));
        }
    }

    fn print_categories<W: Write>(&self, out: &mut W) {
        if self.json {
            print_json(out, &self.app.category_options());
        } else {
            print_line(out, &render::category_list(&self.app.category_options()));
        }
    }

    fn print_form<W: Write>(&self, out: &mut W) {
        if self.json {
            print_json(out, &self.app.form().draft());
        } else {
            print_line(out, &render::form_table(self.app.form()));
        }
    }
}

fn print_line<W: Write>(out: &mut W, text: &str) {
    if let Err(err) = writeln!(out, "{text}") {
        debug!(error = %err, "failed to write shell output");
    }
}

fn print_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => print_line(out, &json),
        Err(err) => print_line(out, &format!("error: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::ValidationIssue;

    fn run(input: &str) -> (Shell, String) {
        let mut shell = Shell::new(InventoryApp::default(), false);
        let mut out = Vec::new();
        shell.run(input.as_bytes(), &mut out).unwrap();
        (shell, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!("search  sams ".parse(), Ok(ShellCommand::Search("sams".to_string())));
        assert_eq!("search".parse(), Ok(ShellCommand::Search(String::new())));
        assert_eq!("edit 3".parse(), Ok(ShellCommand::Edit(ProductId::new(3))));
        assert_eq!(
            "set name Monitor 27\"".parse(),
            Ok(ShellCommand::Set(FormField::Name, "Monitor 27\"".to_string()))
        );
        assert_eq!(
            "set description".parse(),
            Ok(ShellCommand::Set(FormField::Description, String::new()))
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            "frobnicate".parse::<ShellCommand>(),
            Err(ShellError::UnknownCommand("frobnicate".to_string()))
        );
        assert_eq!(
            "delete".parse::<ShellCommand>(),
            Err(ShellError::Usage("delete <id>"))
        );
        assert!(matches!(
            "edit x".parse::<ShellCommand>(),
            Err(ShellError::Inventory(InventoryError::InvalidId(_)))
        ));
        assert!(matches!(
            "set colour red".parse::<ShellCommand>(),
            Err(ShellError::Inventory(InventoryError::UnknownField(_)))
        ));
    }

    #[test]
    fn add_session_creates_a_product() {
        let (shell, out) = run(
            "new\n\
             set name Monitor\n\
             set category Electrónicos\n\
             set price 249.50\n\
             set stock 7\n\
             set min_stock 2\n\
             set sku MON-001\n\
             save\n\
             quit\n",
        );
        assert_eq!(shell.app().all().len(), 5);
        assert_eq!(shell.app().all()[4].sku(), "MON-001");
        assert!(out.contains("Agregar Producto"));
        assert!(out.contains("$249.50"));
    }

    #[test]
    fn validation_errors_are_reported_and_loop_continues() {
        let (shell, out) = run(
            "new\n\
             set name Monitor\n\
             set category Electrónicos\n\
             set price -5\n\
             set stock 7\n\
             set min_stock 2\n\
             set sku MON-001\n\
             save\n\
             stats\n",
        );
        assert!(out.contains("error: El precio debe ser mayor a 0 (price)"));
        assert_eq!(shell.app().all().len(), 4);
        assert!(shell.app().form().is_open());
    }

    #[test]
    fn deleting_unknown_product_prints_not_found() {
        let (shell, out) = run("delete 99\n");
        assert!(out.contains("error: Producto 99 no encontrado"));
        assert_eq!(shell.app().all().len(), 4);
    }

    #[test]
    fn search_filters_the_printed_table() {
        let mut shell = Shell::new(InventoryApp::default(), false);
        let mut out = Vec::new();
        shell
            .execute(ShellCommand::Search("sams".to_string()), &mut out)
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("SAMS-GAL-001"));
        assert!(!out.contains("DELL-XPS-001"));
    }

    #[test]
    fn json_mode_prints_stats_as_json() {
        let mut shell = Shell::new(InventoryApp::default(), true);
        let mut out = Vec::new();
        shell.execute(ShellCommand::Stats, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["total_count"], 4);
        assert_eq!(value["total_value"], 2_589_963);
    }

    #[test]
    fn user_message_names_the_field() {
        let err = ShellError::from(InventoryError::validation(
            FormField::Stock,
            ValidationIssue::NegativeStock,
        ));
        assert_eq!(err.user_message(), "El stock no puede ser negativo (stock)");
    }
}
