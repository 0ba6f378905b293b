//! Novel Queries

/// 列出小说查询（远程默认分页的第一页）
#[derive(Debug, Clone)]
pub struct ListNovels;

/// 列出小说已翻译章节查询
#[derive(Debug, Clone)]
pub struct ListChapters {
    pub sheet_id: String,
}

/// 获取单个章节查询
#[derive(Debug, Clone)]
pub struct GetChapter {
    pub sheet_id: String,
    pub chapter: String,
}
