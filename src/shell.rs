//! Interactive menu shell: prompt, validate, dispatch.
//!
//! The shell owns the reader, writer, state-file path, and current
//! [`Inventory`] — no globals, so every session is an explicit value and
//! tests can drive a full session from a scripted reader. The prompt
//! loops are the sole gate protecting the store's non-negativity
//! invariant: they never hand an invalid value to the inventory.
//!
//! There is no autosave. Changes made through the menu are only written
//! back when the operator picks "Save and Exit"; reloading discards
//! unsaved work without warning.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::core::error::InventoryError;
use crate::core::inventory::Inventory;
use crate::core::output;
use crate::core::persist::{self, LoadOutcome};

pub struct Shell<R, W> {
    input: R,
    out: W,
    state_path: PathBuf,
    inventory: Inventory,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, out: W, state_path: impl Into<PathBuf>) -> Self {
        Self {
            input,
            out,
            state_path: state_path.into(),
            inventory: Inventory::new(),
        }
    }

    /// Current in-memory inventory (read-only; mutation goes through the
    /// menu flows).
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Run the session loop until the operator picks "Save and Exit" or
    /// the input stream ends. Input exhaustion mid-flow also ends the
    /// session cleanly; only genuine write errors propagate.
    pub fn run(&mut self) -> Result<(), InventoryError> {
        writeln!(
            self.out,
            "Welcome to the TechStore inventory management system!"
        )?;
        self.reload()?;

        loop {
            write!(self.out, "{}", output::render_menu())?;
            let option = match self.prompt_option() {
                Ok(option) => option,
                Err(InventoryError::InputClosed) => break,
                Err(err) => return Err(err),
            };
            let outcome = match option {
                1 => self.reload(),
                2 => self.add_product(),
                3 => self.update_stock(),
                4 => self.show_inventory(),
                5 => {
                    self.save_and_exit()?;
                    break;
                }
                _ => unreachable!("prompt_option bounds the range"),
            };
            match outcome {
                Ok(()) => {}
                Err(InventoryError::InputClosed) => break,
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    /// Option 1: replace the in-memory inventory from disk, discarding
    /// unsaved changes, and report which load outcome occurred.
    fn reload(&mut self) -> Result<(), InventoryError> {
        let outcome = persist::load(&self.state_path);
        let status = match &outcome {
            LoadOutcome::Loaded(_) => output::ok_line("inventory loaded successfully"),
            LoadOutcome::Missing => {
                output::warn_line("no inventory file found, starting a new one")
            }
            LoadOutcome::Discarded => {
                output::warn_line("inventory file is corrupt, starting a new one")
            }
        };
        writeln!(self.out, "{status}")?;
        self.inventory = outcome.into_inventory();
        Ok(())
    }

    /// Option 2: prompt name, price, quantity; append on success.
    fn add_product(&mut self) -> Result<(), InventoryError> {
        writeln!(self.out, "\n--- ADD PRODUCT ---")?;

        let name = self.prompt_line("Product name: ")?;
        if name.is_empty() {
            writeln!(
                self.out,
                "{}",
                output::warn_line("product name cannot be empty")
            )?;
            return Ok(());
        }
        if self.inventory.find_by_name(&name).is_some() {
            writeln!(
                self.out,
                "{}",
                output::warn_line(&format!("product '{name}' already exists"))
            )?;
            return Ok(());
        }

        let price = self.prompt_decimal("Product price: $")?;
        let quantity = self.prompt_integer("Stock quantity: ")?;
        match self.inventory.add(&name, price, quantity) {
            Ok(()) => writeln!(
                self.out,
                "{}",
                output::ok_line(&format!("product '{name}' added successfully"))
            )?,
            Err(err) => writeln!(self.out, "{}", output::warn_line(&err.to_string()))?,
        }
        Ok(())
    }

    /// Option 3: look up a product by name and replace its quantity.
    fn update_stock(&mut self) -> Result<(), InventoryError> {
        writeln!(self.out, "\n--- UPDATE STOCK ---")?;

        if self.inventory.is_empty() {
            writeln!(self.out, "{}", output::warn_line("inventory is empty"))?;
            return Ok(());
        }

        let name = self.prompt_line("Product name to search: ")?;
        let (display_name, current) = match self.inventory.find_by_name(&name) {
            Some(product) => (product.name.clone(), product.quantity),
            None => {
                writeln!(
                    self.out,
                    "{}",
                    output::warn_line(&format!("product '{name}' not found"))
                )?;
                return Ok(());
            }
        };

        writeln!(self.out, "Product found: {display_name}")?;
        writeln!(self.out, "Current stock: {current}")?;

        let new_quantity = self.prompt_integer("New quantity: ")?;
        match self.inventory.update_quantity(&name, new_quantity) {
            Ok(previous) => writeln!(
                self.out,
                "{}",
                output::ok_line(&format!(
                    "stock for '{display_name}' updated: {previous} -> {new_quantity}"
                ))
            )?,
            Err(err) => writeln!(self.out, "{}", output::warn_line(&err.to_string()))?,
        }
        Ok(())
    }

    /// Option 4: numbered listing plus computed summary.
    fn show_inventory(&mut self) -> Result<(), InventoryError> {
        writeln!(self.out, "\n--- CURRENT INVENTORY ---")?;
        if self.inventory.is_empty() {
            writeln!(
                self.out,
                "{}",
                output::warn_line("inventory is empty, add products first")
            )?;
            return Ok(());
        }
        write!(self.out, "{}", output::render_listing(&self.inventory))?;
        Ok(())
    }

    /// Option 5: write the state file and say goodbye. A write failure
    /// is reported and leaves the in-memory inventory untouched.
    fn save_and_exit(&mut self) -> Result<(), InventoryError> {
        writeln!(self.out, "\n--- SAVE AND EXIT ---")?;
        match persist::save(&self.state_path, &self.inventory) {
            Ok(()) => writeln!(
                self.out,
                "{}",
                output::ok_line("inventory saved successfully")
            )?,
            Err(err) => writeln!(
                self.out,
                "{}",
                output::warn_line(&format!("failed to save inventory: {err}"))
            )?,
        }
        writeln!(self.out, "Thanks for using TechStore!")?;
        Ok(())
    }

    /// One trimmed line of input, or [`InventoryError::InputClosed`] at
    /// end of stream.
    fn read_line(&mut self) -> Result<String, InventoryError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InventoryError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn prompt_line(&mut self, message: &str) -> Result<String, InventoryError> {
        write!(self.out, "{message}")?;
        self.out.flush()?;
        self.read_line()
    }

    /// Retry until the operator supplies a non-negative decimal.
    fn prompt_decimal(&mut self, message: &str) -> Result<f64, InventoryError> {
        loop {
            let line = self.prompt_line(message)?;
            match line.parse::<f64>() {
                Ok(value) if value >= 0.0 => return Ok(value),
                Ok(_) => writeln!(
                    self.out,
                    "{}",
                    output::warn_line("value cannot be negative, try again")
                )?,
                Err(_) => writeln!(
                    self.out,
                    "{}",
                    output::warn_line("you must enter a valid number")
                )?,
            }
        }
    }

    /// Retry until the operator supplies a non-negative integer.
    fn prompt_integer(&mut self, message: &str) -> Result<u32, InventoryError> {
        loop {
            let line = self.prompt_line(message)?;
            match line.parse::<i64>() {
                Ok(value) if (0..=i64::from(u32::MAX)).contains(&value) => return Ok(value as u32),
                Ok(value) if value < 0 => writeln!(
                    self.out,
                    "{}",
                    output::warn_line("value cannot be negative, try again")
                )?,
                _ => writeln!(
                    self.out,
                    "{}",
                    output::warn_line("you must enter a valid number")
                )?,
            }
        }
    }

    /// Retry until the operator supplies an integer in [1, 5].
    fn prompt_option(&mut self) -> Result<u8, InventoryError> {
        loop {
            let line = self.prompt_line("\nSelect an option (1-5): ")?;
            match line.parse::<u8>() {
                Ok(option @ 1..=5) => return Ok(option),
                Ok(_) => writeln!(
                    self.out,
                    "{}",
                    output::warn_line("invalid option, it must be between 1 and 5")
                )?,
                Err(_) => writeln!(
                    self.out,
                    "{}",
                    output::warn_line("you must enter a valid number")
                )?,
            }
        }
    }
}
