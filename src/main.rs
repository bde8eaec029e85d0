// ==========================================
// 资源生物经济引擎 - 命令行入口
// ==========================================
// 用法: resource-bioeconomics [配置文件.json] [输出目录]
// 配置文件也可通过 RESOURCE_BIOECONOMICS_CONFIG 指定
// ==========================================

use std::path::PathBuf;

use anyhow::Context;
use resource_bioeconomics::config::ConfigLoader;
use resource_bioeconomics::environment::{
    EnvironmentalDataSource, StaticEnvironmentalSource, UnavailableEnvironmentalSource,
};
use resource_bioeconomics::export::default_output_dir;
use resource_bioeconomics::{i18n, logging, AnalysisApi, APP_NAME, VERSION};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", APP_NAME, VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output_dir = args.next().map(PathBuf::from).unwrap_or_else(default_output_dir);

    // 配置错误在模拟前直接退出
    let config = ConfigLoader::load(config_path.as_deref()).context("配置校验失败")?;
    i18n::set_locale(&config.locale);

    // 配置中给出观测统计时使用静态数据源,否则全部回退
    let source: Box<dyn EnvironmentalDataSource> = match config.environment.observed.clone() {
        Some(stats) => Box::new(StaticEnvironmentalSource::new("config", stats)),
        None => Box::new(UnavailableEnvironmentalSource),
    };

    let api = AnalysisApi::new(config)?;
    let (report, summary) = api
        .run_and_export(source.as_ref(), &output_dir)
        .await
        .context("分析执行失败")?;

    println!("运行编号: {}", report.run_id);
    println!("数据质量: {}", report.data_quality);
    println!(
        "最优轮伐期: {} 年 (NPV {:.2})",
        report.rotation.optimal_age, report.rotation.max_npv
    );
    for stock in &report.fishery {
        println!(
            "种群 {}: MSY {:.2}, 预防性捕捞量 {:.2}",
            stock.stock_name, stock.msy, stock.precautionary_catch
        );
    }
    for outcome in &report.scenarios {
        println!(
            "情景 {}: 总利润 {:.2}, 综合指数 {:.4}",
            outcome.scenario.title_cn(),
            outcome.indicators.total_profit,
            outcome.index.composite
        );
    }
    println!(
        "政策建议: {} (差距 {:.4})",
        report.recommendation.title, report.recommendation.gap
    );
    let count = summary.files.len().to_string();
    let dir = summary.output_dir.display().to_string();
    println!(
        "{}",
        i18n::t_with_args("export.summary", &[("count", count.as_str()), ("dir", dir.as_str())])
    );

    Ok(())
}
