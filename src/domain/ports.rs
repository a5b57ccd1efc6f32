use crate::domain::model::MatchPolicy;
use crate::utils::error::Result;

/// 排行榜文件的存放位置，測試可以換成記憶體或暫存目錄
pub trait Storage {
    /// 文件不存在時回傳 `Ok(None)`
    fn read_file(&self, path: &str) -> Result<Option<Vec<u8>>>;
    /// 整份覆寫
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn read_file(&self, path: &str) -> Result<Option<Vec<u8>>> {
        (**self).read_file(path)
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        (**self).write_file(path, data)
    }
}

pub trait ConfigProvider {
    fn highscores_path(&self) -> &str;
    fn leaderboard_capacity(&self) -> usize;
    fn match_policy(&self) -> MatchPolicy;
    fn shuffle_on_start(&self) -> bool;
    fn player_name(&self) -> Option<&str>;
}
