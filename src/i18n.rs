// ==========================================
// 资源生物经济引擎 - 本地化
// ==========================================
// 词条: locales/zh-CN.yml（默认）与 locales/en.yml
// 用途: 政策建议标题/理由、数据质量提示、导出摘要
// 说明: rust_i18n::i18n! 宏在 lib.rs 中初始化
// ==========================================

/// 当前输出语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 切换输出语言（"zh-CN" 或 "en"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 查找词条,缺失时原样返回 key
///
/// ```no_run
/// use resource_bioeconomics::i18n::t;
/// let title = t("recommendation.phased_transition.title");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 查找词条并替换 `%{name}` 占位符
///
/// ```no_run
/// use resource_bioeconomics::i18n::t_with_args;
/// let line = t_with_args("export.summary", &[("count", "7"), ("dir", "out")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(t(key), |text, (name, value)| {
        text.replace(&format!("%{{{}}}", name), value)
    })
}
