use std::path::PathBuf;

/// 收银端购物车配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | /var/lib/pos/cart | 工作目录 (draft 快照文件) |
/// | ORDER_API_URL | http://localhost:3000 | 下单接口地址 |
/// | ORDER_API_TOKEN | (none) | Bearer token |
/// | CURRENCY_DECIMALS | 0 | 货币最小单位的小数位 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// 工作目录，存放 draft 快照数据库
    pub work_dir: String,
    /// Order-creation API base URL
    pub order_api_url: String,
    pub order_api_token: Option<String>,
    /// Decimal places of the currency's smallest unit
    pub currency_decimals: u32,
    pub request_timeout_ms: u64,
}

impl CartConfig {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/pos/cart".into()),
            order_api_url: std::env::var("ORDER_API_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            order_api_token: std::env::var("ORDER_API_TOKEN")
                .ok()
                .filter(|s| !s.is_empty()),
            currency_decimals: std::env::var("CURRENCY_DECIMALS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(0),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// 使用自定义工作目录
    ///
    /// 常用于测试场景
    pub fn with_work_dir(work_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config
    }

    /// Path of the redb file holding draft snapshots
    pub fn drafts_db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("drafts.redb")
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
