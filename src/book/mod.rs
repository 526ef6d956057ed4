//! The client book: an INI-style roster file, one section per client slug.
//!
//! Recognized keys per section (matched case-insensitively): FullName,
//! Address, City, State, Zipcode, Phone, Rate. Unrecognized keys are kept
//! out of the model but do not fail the load.

use crate::errors::{AppError, AppResult};
use crate::logs::LogStore;
use crate::models::Client;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const CLIENT_BOOK_FILE: &str = "client-book.ini";

pub struct ClientBook {
    path: PathBuf,
    clients: BTreeMap<String, Client>,
}

impl ClientBook {
    /// Load the roster, resolving each client's log directory against the
    /// store. A missing book file is an empty roster, not an error.
    pub fn load(path: &Path, store: &LogStore) -> AppResult<Self> {
        let mut book = Self {
            path: path.to_path_buf(),
            clients: BTreeMap::new(),
        };
        if !path.exists() {
            return Ok(book);
        }

        let section_re = Regex::new(r"^\[([^\]]+)\]$").unwrap();
        let mut current: Option<String> = None;
        for raw in fs::read_to_string(path)?.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }
            if let Some(caps) = section_re.captures(line) {
                let slug = caps[1].trim().to_string();
                book.clients
                    .insert(slug.clone(), Client::new(&slug, store.client_dir(&slug)));
                current = Some(slug);
            } else if let Some((key, value)) = line.split_once('=') {
                let Some(slug) = current.as_deref() else {
                    return Err(AppError::Book(format!("key outside any section: {line}")));
                };
                let client = book
                    .clients
                    .get_mut(slug)
                    .expect("section inserted before its keys");
                apply_key(client, key.trim(), value.trim())?;
            } else {
                return Err(AppError::Book(format!("unparseable line: {line}")));
            }
        }
        Ok(book)
    }

    pub fn get(&self, slug: &str) -> AppResult<&Client> {
        self.clients
            .get(slug)
            .ok_or_else(|| AppError::UnknownClient(slug.to_string()))
    }

    pub fn clients(&self) -> impl Iterator<Item = &Client> {
        self.clients.values()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.clients.contains_key(slug)
    }

    /// Register a client and rewrite the book. The caller seeds the log
    /// directory (see `LogStore::ensure_client_dir`).
    pub fn add_client(
        &mut self,
        store: &LogStore,
        slug: &str,
        full_name: &str,
        rate: Option<f64>,
    ) -> AppResult<()> {
        if self.contains(slug) {
            return Err(AppError::Book(format!("client '{slug}' already exists")));
        }
        let mut client = Client::new(slug, store.client_dir(slug));
        client.full_name = Some(full_name.to_string());
        client.rate = rate;
        self.clients.insert(slug.to_string(), client);
        self.save()
    }

    pub fn save(&self) -> AppResult<()> {
        let mut file = fs::File::create(&self.path)?;
        for client in self.clients.values() {
            writeln!(file, "[{}]", client.slug)?;
            write_key(&mut file, "FullName", client.full_name.as_deref())?;
            write_key(&mut file, "Address", client.address.as_deref())?;
            write_key(&mut file, "City", client.city.as_deref())?;
            write_key(&mut file, "State", client.state.as_deref())?;
            write_key(&mut file, "Zipcode", client.zipcode.as_deref())?;
            write_key(&mut file, "Phone", client.phone.as_deref())?;
            if let Some(rate) = client.rate {
                writeln!(file, "Rate = {rate}")?;
            }
            writeln!(file)?;
        }
        Ok(())
    }
}

fn apply_key(client: &mut Client, key: &str, value: &str) -> AppResult<()> {
    let value_opt = (!value.is_empty()).then(|| value.to_string());
    match key.to_ascii_lowercase().as_str() {
        "fullname" => client.full_name = value_opt,
        "address" => client.address = value_opt,
        "city" => client.city = value_opt,
        "state" => client.state = value_opt,
        "zipcode" => client.zipcode = value_opt,
        "phone" => client.phone = value_opt,
        "rate" => {
            client.rate = match value_opt {
                None => None,
                Some(v) => Some(v.parse::<f64>().map_err(|_| {
                    AppError::Book(format!("invalid Rate '{}' for client '{}'", v, client.slug))
                })?),
            }
        }
        _ => {}
    }
    Ok(())
}

fn write_key(file: &mut fs::File, key: &str, value: Option<&str>) -> std::io::Result<()> {
    if let Some(v) = value {
        writeln!(file, "{key} = {v}")?;
    }
    Ok(())
}
