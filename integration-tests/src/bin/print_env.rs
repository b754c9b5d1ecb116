//! Demo program: report argv and the complete environment as JSON
//!
//! Usage: print-env [args...]
//! Outputs a single JSON object on stdout:
//!   {"args": [<arg0>, <arg1>, ...], "env": {<key>: <value>, ...}}
//!
//! Used as the "shell" in launcher tests to see exactly what execve passed.

use std::env;

use anyhow::Result;
use serde_json::{json, Map, Value};

fn main() -> Result<()> {
    let args: Vec<String> = env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let mut vars: Vec<(String, String)> = env::vars_os()
        .map(|(k, v)| (k.to_string_lossy().into_owned(), v.to_string_lossy().into_owned()))
        .collect();
    vars.sort_by(|a, b| a.0.cmp(&b.0));

    let mut env_map = Map::new();
    for (key, value) in vars {
        env_map.insert(key, Value::String(value));
    }

    println!("{}", serde_json::to_string(&json!({ "args": args, "env": env_map }))?);
    Ok(())
}
