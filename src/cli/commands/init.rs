//! # Init Command Module / 初始化命令模块
//!
//! This module implements the `init` command for the Endpoint Checker CLI,
//! which creates a new check suite configuration file, either through an
//! interactive wizard or from a canned template.
//!
//! 此模块实现了 Endpoint Checker CLI 的 `init` 命令，
//! 通过交互式向导或预设模板创建新的检查套件配置文件。
//!
//! ## Features / 功能特性
//!
//! - **Interactive Wizard**: Step-by-step guidance for configuration setup
//! - **Template Selection**: Pre-defined check case templates for common scenarios
//! - **Overwrite Protection**: Confirmation prompts before overwriting existing configurations
//!
//! - **交互式向导**: 配置设置的逐步指导
//! - **模板选择**: 常见场景的预定义检查用例模板
//! - **覆盖保护**: 覆盖现有配置前的确认提示

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Confirm, Input, MultiSelect, theme::ColorfulTheme};
use std::{fs, path::Path, path::PathBuf};

use crate::core::arith::Operation;
use crate::core::config::{CheckCase, CheckSuite};
use crate::infra::t;

const DEFAULT_CONFIG: &str = r#"# Check Suite Configuration / 检查套件配置
# Documentation: https://github.com/ShaoG-R/endpoint-checker

# Language for runner messages / 运行器消息的语言
language = "en"

# Base URL of the calculation endpoint / 计算端点的基础 URL
base_url = "http://127.0.0.1:8080"

# Request timeout applied to every case / 应用于每个用例的请求超时
default_timeout_secs = 30

# Check Cases / 检查用例
[[cases]]
name = "add-small" # Unique name of the case / 用例的唯一名称
op = "add" # One of: add, subtract, multiply / 其中之一：add, subtract, multiply
lhs = 2
rhs = 2
expected = 4

[[cases]]
name = "subtract-equal"
op = "subtract"
lhs = 2
rhs = 2
expected = 0

[[cases]]
name = "multiply-small"
op = "multiply"
lhs = 2
rhs = 2
expected = 4

[[cases]]
name = "add-negative"
op = "add"
lhs = -1
rhs = 1
expected = 0

[[cases]]
name = "multiply-zero"
op = "multiply"
lhs = 0
rhs = 5
expected = 0
# Optional per-case timeout in seconds / 可选的用例级超时时间（秒）
# timeout_secs = 5
"#;

/// Executes the init command with the provided arguments.
///
/// # Arguments
/// * `output` - Path for the new configuration file
/// * `force` - Whether to overwrite an existing file without asking
/// * `non_interactive` - Write the canned template instead of running the wizard
/// * `locale` - Language for messages and prompts
pub fn execute(output: PathBuf, force: bool, non_interactive: bool, locale: &str) -> Result<()> {
    if non_interactive {
        return write_config(&output, DEFAULT_CONFIG, force, locale);
    }

    run_init_wizard(&output, force, locale)
}

/// Runs the interactive wizard to generate a check suite configuration.
///
/// # Process Flow / 处理流程
/// 1. Display welcome message / 显示欢迎消息
/// 2. Check for existing configuration and confirm overwrite if needed
///    检查现有配置并在需要时确认覆盖
/// 3. Prompt for the endpoint base URL / 提示输入端点基础 URL
/// 4. Prompt user to select check case templates / 提示用户选择检查用例模板
/// 5. Generate and save the configuration file / 生成并保存配置文件
fn run_init_wizard(output: &Path, force: bool, locale: &str) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("\n{}", t!("init.wizard_welcome", locale = locale).bold().cyan());
    println!("{}\n", t!("init.wizard_description", locale = locale));

    if output.exists() && !force {
        let overwrite = Confirm::with_theme(&theme)
            .with_prompt(
                t!("init.confirm_overwrite", locale = locale, path = output.display()).to_string(),
            )
            .default(false)
            .interact()
            .context(t!("init.confirmation_failed", locale = locale))?;
        if !overwrite {
            println!("{}", t!("init.aborted", locale = locale).yellow());
            return Ok(());
        }
    }

    let base_url: String = Input::with_theme(&theme)
        .with_prompt(t!("init.base_url_prompt", locale = locale).to_string())
        .default("http://127.0.0.1:8080".to_string())
        .interact_text()
        .context(t!("init.input_failed", locale = locale))?;

    let templates = case_templates();
    let template_names: Vec<&str> = templates.iter().map(|case| case.name.as_str()).collect();

    let selections = MultiSelect::with_theme(&theme)
        .with_prompt(t!("init.case_selection_prompt", locale = locale).to_string())
        .items(&template_names)
        .defaults(&vec![true; templates.len()])
        .interact()
        .context(t!("init.input_failed", locale = locale))?;

    if selections.is_empty() {
        println!("{}", t!("init.no_cases_selected", locale = locale).yellow());
        return Ok(());
    }

    let suite = CheckSuite {
        language: locale.to_string(),
        base_url,
        default_timeout_secs: Some(30),
        cases: selections
            .into_iter()
            .map(|index| templates[index].clone())
            .collect(),
    };

    let mut content = format!(
        "# Check Suite Configuration / 检查套件配置\n# {}\n\n",
        t!("init.generated_header", locale = locale)
    );
    content.push_str(
        &toml::to_string_pretty(&suite).context(t!("init.serialize_failed", locale = locale))?,
    );

    // The wizard already confirmed overwriting above.
    write_config(output, &content, true, locale)
}

/// The starter cases offered by the wizard, one per documented behavior of
/// the calculation service.
/// 向导提供的起始用例，计算服务的每个已记录行为各一个。
fn case_templates() -> Vec<CheckCase> {
    vec![
        CheckCase {
            name: "add-small".to_string(),
            op: Operation::Add,
            lhs: 2,
            rhs: 2,
            expected: 4,
            ..CheckCase::default()
        },
        CheckCase {
            name: "subtract-equal".to_string(),
            op: Operation::Subtract,
            lhs: 2,
            rhs: 2,
            expected: 0,
            ..CheckCase::default()
        },
        CheckCase {
            name: "multiply-small".to_string(),
            op: Operation::Multiply,
            lhs: 2,
            rhs: 2,
            expected: 4,
            ..CheckCase::default()
        },
        CheckCase {
            name: "add-negative".to_string(),
            op: Operation::Add,
            lhs: -1,
            rhs: 1,
            expected: 0,
            ..CheckCase::default()
        },
        CheckCase {
            name: "multiply-zero".to_string(),
            op: Operation::Multiply,
            lhs: 0,
            rhs: 5,
            expected: 0,
            ..CheckCase::default()
        },
    ]
}

/// Writes the configuration content, honoring overwrite protection.
fn write_config(output: &Path, content: &str, force: bool, locale: &str) -> Result<()> {
    if output.exists() && !force {
        println!(
            "{}",
            t!("init.file_exists", locale = locale, path = output.display()).red()
        );
        println!("{}", t!("init.use_force", locale = locale).yellow());
        return Ok(());
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                t!("init.create_parent_dir_failed", locale = locale, path = parent.display())
            })?;
        }
    }

    fs::write(output, content)
        .with_context(|| t!("init.write_failed", locale = locale, path = output.display()))?;

    println!(
        "{}",
        t!("init.success", locale = locale, path = output.display()).green()
    );
    println!("{}", t!("init.next_steps", locale = locale));

    Ok(())
}
