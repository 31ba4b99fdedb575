//! Interactive catalog menu.
//!
//! The menu reads from any `BufRead` and writes to any `Write`, so the same
//! loop serves stdin/stdout and scripted tests. End of input ends the
//! session the same way choosing "Exit" does.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use colored::Colorize;
use libcat_catalog::{add_book, add_reader, add_shelf, count_readers};
use libcat_snapshot::{decode_snapshot, encode_snapshot};
use libcat_types::{Author, Library, Shelf};
use tracing::debug;

/// Whether the session goes on after a step.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Menu<R, W> {
    input: R,
    output: W,
    library: Library,
    snapshot: PathBuf,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, library: Library, snapshot: PathBuf) -> Self {
        Self {
            input,
            output,
            library,
            snapshot,
        }
    }

    /// Consume the menu, returning the current library and the output sink.
    pub fn into_parts(self) -> (Library, W) {
        (self.library, self.output)
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            writeln!(self.output, "\nMenu:")?;
            writeln!(self.output, "1) Add a reader")?;
            writeln!(self.output, "2) Library Report")?;
            writeln!(self.output, "3) Serialize Library")?;
            writeln!(self.output, "4) Deserialize Library")?;
            writeln!(self.output, "5) Add Book or Storage")?;
            writeln!(self.output, "6) Exit")?;
            let Some(choice) = self.prompt_number::<u32>("Enter your choice: ")? else {
                return Ok(());
            };
            debug!(choice, "main menu");

            let flow = match choice {
                1 => self.add_reader()?,
                2 => match self.report()? {
                    Flow::Continue => {
                        self.show_total_readers()?;
                        Flow::Continue
                    }
                    Flow::Exit => Flow::Exit,
                },
                3 => self.save()?,
                4 => self.load()?,
                5 => self.add_book_or_storage()?,
                6 => {
                    writeln!(self.output, "Exiting the program.")?;
                    Flow::Exit
                }
                _ => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    // ---- Input ----

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(self.read_line()?)
    }

    /// Prompt until the answer parses; `None` at end of input.
    fn prompt_number<T: FromStr>(&mut self, text: &str) -> anyhow::Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(text)? else {
                return Ok(None);
            };
            match line.trim().parse() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => writeln!(self.output, "Invalid number. Please try again.")?,
            }
        }
    }

    fn success(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{} {message}", "✓".green().bold())
    }

    fn failure(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{} {message}", "Error:".red().bold())
    }

    // ---- Readers ----

    fn add_reader(&mut self) -> anyhow::Result<Flow> {
        writeln!(self.output, "Enter reader details:")?;
        let Some(name) = self.prompt("Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(number) = self.prompt_number::<u32>("Registration Number: ")? else {
            return Ok(Flow::Exit);
        };
        add_reader(&mut self.library, &name, number);
        self.success("Reader added successfully.")?;
        Ok(Flow::Continue)
    }

    fn show_total_readers(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Total Readers in the Library: {}",
            count_readers(&self.library)
        )
    }

    // ---- Report ----

    fn report(&mut self) -> anyhow::Result<Flow> {
        loop {
            writeln!(self.output, "\nLibrary Report:")?;
            writeln!(self.output, "1) Display Book Storages")?;
            writeln!(self.output, "2) Display Readers")?;
            writeln!(self.output, "3) Display Total Readers")?;
            writeln!(self.output, "4) Back to Main Menu")?;
            let Some(choice) = self.prompt_number::<u32>("Enter your choice: ")? else {
                return Ok(Flow::Exit);
            };
            match choice {
                1 => {
                    if self.display_storages()? == Flow::Exit {
                        return Ok(Flow::Exit);
                    }
                }
                2 => {
                    writeln!(self.output, "Readers:")?;
                    for reader in self.library.readers() {
                        writeln!(self.output, "{reader}")?;
                    }
                }
                3 => self.show_total_readers()?,
                4 => {
                    writeln!(self.output, "Returning to the main menu.")?;
                    return Ok(Flow::Continue);
                }
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    fn display_storages(&mut self) -> anyhow::Result<Flow> {
        writeln!(self.output, "Book Storages:")?;
        for (i, shelf) in self.library.storage().shelves().iter().enumerate() {
            writeln!(self.output, "{}) {}", i + 1, shelf.name())?;
        }
        let Some(pick) = self.prompt_number::<usize>(
            "Enter the number of the Book Storage to display books (0 to go back): ",
        )?
        else {
            return Ok(Flow::Exit);
        };
        if let Some(shelf) = pick
            .checked_sub(1)
            .and_then(|idx| self.library.storage().shelves().get(idx))
        {
            write_shelf_books(&mut self.output, shelf)?;
        }
        Ok(Flow::Continue)
    }

    // ---- Snapshots ----

    fn save(&mut self) -> anyhow::Result<Flow> {
        match encode_snapshot(&self.library, &self.snapshot) {
            Ok(()) => self.success("Library serialized successfully.")?,
            Err(e) => self.failure(&format!("Serialization failed: {e}"))?,
        }
        Ok(Flow::Continue)
    }

    fn load(&mut self) -> anyhow::Result<Flow> {
        match decode_snapshot::<Library>(&self.snapshot) {
            Ok(library) => {
                self.library = library;
                self.success("Library deserialized successfully.")?;
            }
            Err(e) => self.failure(&format!("Deserialization failed: {e}"))?,
        }
        Ok(Flow::Continue)
    }

    // ---- Books and storages ----

    fn add_book_or_storage(&mut self) -> anyhow::Result<Flow> {
        writeln!(self.output, "Choose what to add:")?;
        writeln!(self.output, "1) Book")?;
        writeln!(self.output, "2) Storage")?;
        let Some(choice) = self.prompt_number::<u32>("Enter your choice: ")? else {
            return Ok(Flow::Exit);
        };
        match choice {
            1 => self.add_book(),
            2 => self.add_storage(),
            _ => {
                writeln!(self.output, "Invalid choice. Please try again.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn add_storage(&mut self) -> anyhow::Result<Flow> {
        let Some(name) = self.prompt("Enter the name of the new Book Storage: ")? else {
            return Ok(Flow::Exit);
        };
        match add_shelf(self.library.storage_mut(), &name) {
            Ok(()) => self.success(&format!("Storage added successfully: {name}"))?,
            Err(e) => self.failure(&e.to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn add_book(&mut self) -> anyhow::Result<Flow> {
        writeln!(self.output, "Enter book details:")?;
        let Some(title) = self.prompt("Title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(first_name) = self.prompt("Author's First Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(last_name) = self.prompt("Author's Last Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(year) = self.prompt_number::<i32>("Publication Year: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(edition) = self.prompt_number::<u32>("Edition Number: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(shelf_name) = self.prompt("Enter the name of the Book Storage: ")? else {
            return Ok(Flow::Exit);
        };

        let author = Author::from_parts(&first_name, &last_name);
        match add_book(
            self.library.storage_mut(),
            &shelf_name,
            &title,
            author,
            Some(year),
            edition,
        ) {
            Ok(_) => self.success(&format!("Book added successfully to storage: {shelf_name}"))?,
            Err(e) => self.failure(&e.to_string())?,
        }
        Ok(Flow::Continue)
    }
}

fn write_shelf_books(out: &mut impl Write, shelf: &Shelf) -> io::Result<()> {
    writeln!(out, "Books in {}:", shelf.name())?;
    for book in shelf.books() {
        writeln!(out, "    - {book}")?;
    }
    writeln!(out)
}
