//! Interactive fitting shell.
//!
//! Drives a line-based session over any `BufRead`/`Write` pair: pick a
//! hull from the compendium, fit weapons, craft and systems to it, then
//! print the finished sheet to PDF.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use compendium::Compendium;
use ship_model::{Bay, Mount, Ship, ShipSystem};
use thiserror::Error;

const PROMPT: &str = ">  ";

/// Raised when the input stream ends mid-session. [`Shell::run`] treats
/// it as a normal exit so piped input does not report an error.
#[derive(Debug, Error)]
#[error("input stream closed")]
struct InputClosed;

/// A fitting session bound to an input and output stream.
pub struct Shell<R, W> {
    input: R,
    output: W,
    compendium: Compendium,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, compendium: Compendium) -> Self {
        Self {
            input,
            output,
            compendium,
        }
    }

    /// Runs a full session. Returns once the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        match self.session() {
            Err(error) if error.is::<InputClosed>() => Ok(()),
            result => result,
        }
    }

    fn session(&mut self) -> Result<()> {
        let mut ship = self.select_ship(None)?;
        self.show_ship(&ship)?;
        self.command_loop(&mut ship)
    }

    fn command_loop(&mut self, ship: &mut Ship) -> Result<()> {
        self.show_commands()?;
        loop {
            writeln!(self.output, "Enter a command ('help' for command list):")?;
            let Some(line) = self.prompt()? else { break };
            let (head, rest) = split_word(line.trim());
            match head.to_lowercase().as_str() {
                "help" => self.show_commands()?,
                "ship" => *ship = self.select_ship(rest)?,
                "sheet" => self.export_ship(ship, rest)?,
                "show" => self.show_ship(ship)?,
                "exit" => break,
                "id" => self.select_identifier(ship, rest)?,
                "mounts" => self.equip_mounts(ship)?,
                "mount" => match rest {
                    Some(arg) => {
                        let token = split_word(arg).0;
                        match token.parse::<i32>() {
                            Ok(number) => self.equip_mount(ship, number)?,
                            Err(_) => writeln!(self.output, "{} is not an integer.", token)?,
                        }
                    }
                    None => writeln!(self.output, "Must provide a number for the mount.")?,
                },
                "bays" => self.equip_bays(ship)?,
                "bay" => match rest {
                    Some(arg) => {
                        let token = split_word(arg).0;
                        match token.parse::<i32>() {
                            Ok(number) => self.equip_bay(ship, number)?,
                            Err(_) => writeln!(self.output, "{} is not an integer.", token)?,
                        }
                    }
                    None => writeln!(self.output, "Must provide a number for the bay.")?,
                },
                "system" => match rest.map(split_word) {
                    Some((sub, name)) if sub.eq_ignore_ascii_case("add") => {
                        self.add_system(ship, name)?
                    }
                    Some((sub, name)) if sub.eq_ignore_ascii_case("remove") => {
                        self.remove_system(ship, name)?
                    }
                    _ => writeln!(self.output, "Must provide 'add' or 'remove' in the command.")?,
                },
                _ => writeln!(self.output, "Invalid command.")?,
            }
        }
        writeln!(self.output, "Exiting.")?;
        Ok(())
    }

    /// Picks a ship template, tags it with an identifier and fits the
    /// hull's default systems and traits.
    fn select_ship(&mut self, initial: Option<&str>) -> Result<Ship> {
        writeln!(
            self.output,
            "Enter the name of the ship template to use (ex: Emblem)."
        )?;
        if let Some(query) = initial {
            if let Some(ship) = self.try_select_ship(query)? {
                return Ok(ship);
            }
        }
        loop {
            let Some(input) = self.prompt()? else {
                writeln!(self.output, "No input found. Exiting.")?;
                return Err(InputClosed.into());
            };
            if let Some(ship) = self.try_select_ship(&input)? {
                return Ok(ship);
            }
        }
    }

    fn try_select_ship(&mut self, query: &str) -> Result<Option<Ship>> {
        match self.compendium.ship(query).cloned() {
            Some(mut ship) => {
                self.select_identifier(&mut ship, None)?;
                self.compendium.equip_default_systems(&mut ship);
                self.compendium.apply_default_traits(&mut ship);
                Ok(Some(ship))
            }
            None => {
                writeln!(
                    self.output,
                    "{} does not match any ship template. Enter another name.",
                    query
                )?;
                Ok(None)
            }
        }
    }

    fn select_identifier(&mut self, ship: &mut Ship, inline: Option<&str>) -> Result<()> {
        if let Some(identifier) = inline {
            ship.identifier = Some(identifier.to_string());
            return Ok(());
        }
        writeln!(self.output, "Enter the identifier of the ship.")?;
        let Some(input) = self.prompt()? else {
            writeln!(self.output, "No input found. Exiting.")?;
            return Err(InputClosed.into());
        };
        ship.identifier = Some(input);
        Ok(())
    }

    fn show_ship(&mut self, ship: &Ship) -> Result<()> {
        writeln!(self.output)?;
        let identifier = match ship.identifier.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => "<No Identifier>",
        };
        writeln!(self.output, "{}: {}", identifier, ship.name)?;
        writeln!(self.output, "Mounts:")?;
        for (i, mount) in ship.mounts.iter().enumerate() {
            writeln!(self.output, "{} | {}", i + 1, describe_mount(mount))?;
        }
        writeln!(self.output, "Bays:")?;
        for (i, bay) in ship.bays.iter().enumerate() {
            writeln!(self.output, "{} | {}", i + 1, describe_bay(bay))?;
        }
        writeln!(
            self.output,
            "Systems ({}/{} slots free):",
            ship.free_system_slots(),
            ship.system_slots
        )?;
        for (i, system) in ship.slot_systems().enumerate() {
            writeln!(self.output, "{} | {}", i + 1, describe_system(system))?;
        }
        Ok(())
    }

    fn equip_mounts(&mut self, ship: &mut Ship) -> Result<()> {
        for number in 1..=ship.mounts.len() {
            self.equip_mount(ship, number as i32)?;
        }
        Ok(())
    }

    fn equip_mount(&mut self, ship: &mut Ship, number: i32) -> Result<()> {
        if number < 1 || number as usize > ship.mounts.len() {
            writeln!(self.output, "The ship has no mount with number {}.", number)?;
            return Ok(());
        }
        let index = (number - 1) as usize;
        writeln!(
            self.output,
            "\nEnter the name of the weapon to equip (ex: Light Spinal Rail), nothing to make no changes, or '-' to remove the weapon."
        )?;
        writeln!(
            self.output,
            "{} | {}",
            number,
            describe_mount(&ship.mounts[index])
        )?;
        loop {
            let Some(input) = self.prompt()? else {
                return Err(InputClosed.into());
            };
            if input.is_empty() {
                return Ok(());
            }
            if input == "-" {
                ship.mounts[index].unequip();
                writeln!(self.output, "Unequipped weapon from mount.")?;
                return Ok(());
            }
            match self.compendium.weapon(&input).cloned() {
                Some(weapon) => match ship.mounts[index].equip(weapon) {
                    Ok(()) => {
                        writeln!(self.output, "Equipped weapon to mount!")?;
                        return Ok(());
                    }
                    Err(error) => writeln!(self.output, "{}", error)?,
                },
                None => writeln!(
                    self.output,
                    "No weapon named {}. Make sure the weapon name is capitalized correctly.",
                    input
                )?,
            }
        }
    }

    fn equip_bays(&mut self, ship: &mut Ship) -> Result<()> {
        for number in 1..=ship.bays.len() {
            self.equip_bay(ship, number as i32)?;
        }
        Ok(())
    }

    fn equip_bay(&mut self, ship: &mut Ship, number: i32) -> Result<()> {
        if number < 1 || number as usize > ship.bays.len() {
            writeln!(self.output, "The ship has no bay with number {}.", number)?;
            return Ok(());
        }
        let index = (number - 1) as usize;
        writeln!(
            self.output,
            "\nEnter the name of the craft to equip (ex: Light Missile), nothing to make no changes, or '-' to remove the craft."
        )?;
        writeln!(
            self.output,
            "{} | {}",
            number,
            describe_bay(&ship.bays[index])
        )?;
        loop {
            let Some(input) = self.prompt()? else {
                return Err(InputClosed.into());
            };
            if input.is_empty() {
                return Ok(());
            }
            if input == "-" {
                ship.bays[index].unequip();
                writeln!(self.output, "Unequipped craft from bay.")?;
                return Ok(());
            }
            match self.compendium.craft(&input).cloned() {
                Some(craft) => match ship.bays[index].equip(craft) {
                    Ok(()) => {
                        writeln!(self.output, "Equipped craft to bay!")?;
                        return Ok(());
                    }
                    Err(error) => writeln!(self.output, "{}", error)?,
                },
                None => writeln!(
                    self.output,
                    "No craft named {}. Make sure the craft name is capitalized correctly.",
                    input
                )?,
            }
        }
    }

    fn add_system(&mut self, ship: &mut Ship, initial: Option<&str>) -> Result<()> {
        writeln!(
            self.output,
            "\nEnter the name of the system to equip (ex: Bulk Magazine), or nothing to go back. Free slots: {}/{}.",
            ship.free_system_slots(),
            ship.system_slots
        )?;
        if let Some(name) = initial {
            if self.try_add_system(ship, name)? {
                return Ok(());
            }
        }
        loop {
            let Some(input) = self.prompt()? else {
                return Err(InputClosed.into());
            };
            if input.is_empty() {
                return Ok(());
            }
            if self.try_add_system(ship, &input)? {
                return Ok(());
            }
        }
    }

    fn try_add_system(&mut self, ship: &mut Ship, name: &str) -> Result<bool> {
        match self.compendium.system(name).cloned() {
            Some(system) => match ship.equip_system(system) {
                Ok(()) => {
                    writeln!(self.output, "Equipped system!")?;
                    Ok(true)
                }
                Err(error) => {
                    writeln!(self.output, "{}", error)?;
                    Ok(false)
                }
            },
            None => {
                writeln!(
                    self.output,
                    "No system named {}. Make sure the system name is capitalized correctly.",
                    name
                )?;
                Ok(false)
            }
        }
    }

    fn remove_system(&mut self, ship: &mut Ship, initial: Option<&str>) -> Result<()> {
        writeln!(
            self.output,
            "\nEnter the name of the system to remove (ex: Bulk Magazine), or nothing to go back."
        )?;
        for (i, system) in ship.slot_systems().enumerate() {
            writeln!(self.output, "{} | {}", i + 1, describe_system(system))?;
        }
        if let Some(name) = initial {
            if self.try_remove_system(ship, name)? {
                return Ok(());
            }
        }
        loop {
            let Some(input) = self.prompt()? else {
                return Err(InputClosed.into());
            };
            if input.is_empty() {
                return Ok(());
            }
            if self.try_remove_system(ship, &input)? {
                return Ok(());
            }
        }
    }

    fn try_remove_system(&mut self, ship: &mut Ship, name: &str) -> Result<bool> {
        match self.compendium.system(name).cloned() {
            Some(system) if system.is_core() => {
                writeln!(
                    self.output,
                    "Cannot remove default system {}. Only systems that cost slots can be removed.",
                    name
                )?;
                Ok(false)
            }
            Some(system) => {
                if ship.remove_system(&system.name).is_some() {
                    writeln!(self.output, "System removed.")?;
                    Ok(true)
                } else {
                    writeln!(
                        self.output,
                        "The ship does not carry a system named {}.",
                        name
                    )?;
                    Ok(false)
                }
            }
            None => {
                writeln!(
                    self.output,
                    "No system named {}. Make sure the system name is capitalized correctly.",
                    name
                )?;
                Ok(false)
            }
        }
    }

    fn export_ship(&mut self, ship: &Ship, inline_path: Option<&str>) -> Result<()> {
        if let Some(path) = inline_path {
            if self.try_export(ship, path)? {
                return Ok(());
            }
        }
        loop {
            writeln!(
                self.output,
                "Enter the path where the sheet should be saved (ex: test.pdf), or nothing to go back."
            )?;
            let Some(input) = self.prompt()? else {
                return Err(InputClosed.into());
            };
            if input.is_empty() {
                return Ok(());
            }
            if self.try_export(ship, &input)? {
                return Ok(());
            }
        }
    }

    fn try_export(&mut self, ship: &Ship, path: &str) -> Result<bool> {
        match pdf_render::save_sheet(ship, Path::new(path), true) {
            Ok(()) => {
                writeln!(self.output, "Sheet saved!")?;
                Ok(true)
            }
            Err(error) => {
                writeln!(
                    self.output,
                    "Something went wrong. Possibly could not find or could not modify the file {}",
                    path
                )?;
                writeln!(self.output, "{}", error)?;
                Ok(false)
            }
        }
    }

    fn show_commands(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Command list:")?;
        writeln!(
            self.output,
            "When typing commands, do not enter the quotes ' or triangle brackets <>."
        )?;
        writeln!(self.output, "\nBasic commands:\n")?;
        writeln!(self.output, "'help': show this command list")?;
        writeln!(
            self.output,
            "'ship': select a new ship template to use, discarding the current one"
        )?;
        writeln!(self.output, "'show': show the state of the current ship")?;
        writeln!(
            self.output,
            "'sheet': output the character sheet for the current ship"
        )?;
        writeln!(self.output, "'exit': exit the application")?;
        writeln!(self.output, "\nShip editing commands:\n")?;
        writeln!(self.output, "'id': change the ship's identifier")?;
        writeln!(self.output, "'mounts': equip weapons to all mounts, 1 by 1")?;
        writeln!(
            self.output,
            "'mount <number>': equip a weapon to the mount with the corresponding number"
        )?;
        writeln!(self.output, "'bays': equip crafts to all bays, 1 by 1")?;
        writeln!(
            self.output,
            "'bay <number>': equip a craft to the bay with the corresponding number"
        )?;
        writeln!(self.output, "'system add': add a non-default system")?;
        writeln!(self.output, "'system remove': remove a non-default system")?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<Option<String>> {
        write!(self.output, "{}", PROMPT)?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

fn describe_mount(mount: &Mount) -> String {
    let weapon = mount.weapon.as_ref().map_or("Empty", |w| w.name.as_str());
    format!(
        "Mount S{}C{} ({:?} {:?}): {}",
        mount.size, mount.count, mount.main_arc, mount.kind, weapon
    )
}

fn describe_bay(bay: &Bay) -> String {
    let craft = bay.craft.as_ref().map_or("Empty", |c| c.name.as_str());
    format!(
        "Bay S{}C{} ({}): {}",
        bay.size,
        bay.count,
        bay.position_code(),
        craft
    )
}

fn describe_system(system: &ShipSystem) -> String {
    format!("{} ({} slots)", system.name, system.slots)
}

/// Splits off the first whitespace-delimited word, returning the rest of
/// the line (trimmed) when anything follows it.
fn split_word(text: &str) -> (&str, Option<&str>) {
    match text.split_once(char::is_whitespace) {
        Some((head, rest)) => {
            let rest = rest.trim_start();
            (head, (!rest.is_empty()).then_some(rest))
        }
        None => (text, None),
    }
}
