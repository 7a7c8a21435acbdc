//! # CLI Commands / CLI 命令
//!
//! One module per subcommand: `run` drives a check suite, `serve` hosts the
//! built-in calculation service, `init` scaffolds a suite configuration.
//!
//! 每个子命令一个模块：`run` 驱动检查套件，`serve` 托管内置计算服务，
//! `init` 生成套件配置脚手架。

pub mod init;
pub mod run;
pub mod serve;
