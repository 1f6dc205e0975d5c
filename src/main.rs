//! credit-audit 命令行入口
//! 批量检核成绩单PDF，按参数顺序输出文本表格或JSON

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use credit_audit::config::{DEFAULT_CATEGORY_MAP_PATH, DEFAULT_MAX_PAGES};
use credit_audit::{AuditReport, ConfigManager, TableFormatter, TranscriptAuditor};

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "credit-audit", version, about = "成績單PDF學分檢核工具")]
struct Cli {
    /// 成绩单PDF文件（可多个）
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// 分类对照表JSON路径
    #[arg(short, long, default_value = DEFAULT_CATEGORY_MAP_PATH)]
    config: PathBuf,

    /// 每份文件最多处理的页数
    #[arg(short = 'p', long, default_value_t = DEFAULT_MAX_PAGES, value_parser = parse_max_pages)]
    max_pages: usize,

    /// 输出格式
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

/// JSON 输出单元
#[derive(Serialize)]
struct FileReport<'a> {
    file: String,
    #[serde(flatten)]
    report: &'a AuditReport,
}

fn parse_max_pages(s: &str) -> Result<usize, String> {
    let pages: usize = s.parse().map_err(|_| format!("无效页数：{}", s))?;
    if pages == 0 {
        return Err("页数至少为 1".to_string());
    }
    Ok(pages)
}

/// 初始化日志：RUST_LOG 优先，否则按 -v 选择 debug / info
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// 读取并检核单个文件
fn audit_file(auditor: &TranscriptAuditor, path: &Path) -> Result<AuditReport> {
    let bytes = std::fs::read(path).with_context(|| format!("读取文件失败：{}", path.display()))?;
    auditor
        .audit_pdf(&bytes)
        .with_context(|| format!("检核失败：{}", path.display()))
}

fn print_report(path: &Path, report: &AuditReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("📄 {}", path.display());
            println!("{}", TableFormatter::render_report(report));
        }
        OutputFormat::Json => {
            let output = FileReport {
                file: path.display().to_string(),
                report,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

/// 按提交顺序等待任务；任务 panic 或被取消时记为该文件失败，不影响其余结果
async fn join_in_order<T>(handles: Vec<JoinHandle<Result<T>>>) -> Vec<Result<T>> {
    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(match handle.await {
            Ok(result) => result,
            Err(e) => Err(anyhow!("检核任务异常退出：{}", e)),
        });
    }
    results
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = ConfigManager::custom()
        .category_map_path(&cli.config)
        .max_pages(cli.max_pages)
        .verbose(cli.verbose)
        .build();
    init_logging(config.verbose);

    // 对照表加载失败时不处理任何文件
    let auditor = Arc::new(
        TranscriptAuditor::from_config(&config)
            .with_context(|| format!("加载分类配置失败：{}", config.category_map_path.display()))?,
    );

    let handles: Vec<_> = cli
        .files
        .iter()
        .cloned()
        .map(|path| {
            let auditor = Arc::clone(&auditor);
            tokio::task::spawn_blocking(move || audit_file(&auditor, &path))
        })
        .collect();

    let mut failed = 0usize;
    for (path, result) in cli.files.iter().zip(join_in_order(handles).await) {
        match result {
            Ok(report) => print_report(path, &report, cli.format)?,
            Err(e) => {
                failed += 1;
                error!("{:#}", e);
                eprintln!("❌ {}：{:#}", path.display(), e);
            }
        }
    }

    info!("处理完成：共{}份，失败{}份", cli.files.len(), failed);
    Ok(if failed > 0 { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
