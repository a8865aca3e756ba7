// Copyright 2026 Carprompt Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::Path;

use assert_cmd::Command;
use carprompt::interpret;
use tempfile::TempDir;

const PROMPTS: &[&str] = &[
    "BMW around 2018, strong horsepower, good mpg",
    "under 25k, automatic, diesel",
    "fast suv",
    "2016-2020",
    "V8, torque over 400",
    "Land Rover Discovery",
    "Audi A4 awd manual petrol wagon since 2015 under $30,000",
    "electric hatchback between 200 and 400 hp, 0-100 under 6 seconds",
    "",
];

fn carprompt_cmd(config_root: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("carprompt"));
    cmd.env("XDG_CONFIG_HOME", config_root);
    cmd.env("HOME", config_root);
    cmd.env("APPDATA", config_root);
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run_stdout(cmd: &mut Command) -> String {
    let output = cmd.output().expect("run command");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn library_results_are_stable() {
    let brands: Vec<String> = ["BMW", "Audi", "Rover", "Land Rover"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    for prompt in PROMPTS {
        let first = interpret(prompt, &brands);
        let first_json = serde_json::to_string(&first).expect("serialize");
        for _ in 0..5 {
            let again = interpret(prompt, &brands);
            assert_eq!(again, first, "prompt: {prompt:?}");
            assert_eq!(
                serde_json::to_string(&again).expect("serialize"),
                first_json
            );
        }
    }
}

#[test]
fn brand_catalog_order_does_not_matter() {
    let forward: Vec<String> = vec!["Rover".into(), "Land Rover".into(), "BMW".into()];
    let mut backward = forward.clone();
    backward.reverse();
    for prompt in PROMPTS {
        assert_eq!(
            interpret(prompt, &forward),
            interpret(prompt, &backward),
            "prompt: {prompt:?}"
        );
    }
}

#[test]
fn cli_outputs_are_stable() {
    let config_temp = TempDir::new().expect("config tempdir");
    let config_root = config_temp.path();
    for prompt in PROMPTS {
        let run = |subcommand: &str| {
            let mut cmd = carprompt_cmd(config_root);
            cmd.args([subcommand, *prompt, "--brand", "BMW", "--json"]);
            run_stdout(&mut cmd)
        };
        for subcommand in ["parse", "request"] {
            let first = run(subcommand);
            let second = run(subcommand);
            assert_eq!(first, second, "{subcommand} {prompt:?}");
        }
    }
}
