//! Favorite Context - Value Objects

/// 收藏目标类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteKind {
    Person,
    Planet,
}

impl FavoriteKind {
    /// 路由与日志使用的资源名
    pub fn as_str(&self) -> &'static str {
        match self {
            FavoriteKind::Person => "people",
            FavoriteKind::Planet => "planet",
        }
    }
}

impl std::fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 收藏目标
///
/// 表结构允许 `people_id` 与 `planet_id` 同时为空或同时有值，
/// 写入路径只接受这个枚举，因此新收藏总是恰好指向一个目标。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteTarget {
    Person(i64),
    Planet(i64),
}

impl FavoriteTarget {
    pub fn new(kind: FavoriteKind, id: i64) -> Self {
        match kind {
            FavoriteKind::Person => FavoriteTarget::Person(id),
            FavoriteKind::Planet => FavoriteTarget::Planet(id),
        }
    }

    pub fn kind(&self) -> FavoriteKind {
        match self {
            FavoriteTarget::Person(_) => FavoriteKind::Person,
            FavoriteTarget::Planet(_) => FavoriteKind::Planet,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            FavoriteTarget::Person(id) | FavoriteTarget::Planet(id) => *id,
        }
    }

    pub fn people_id(&self) -> Option<i64> {
        match self {
            FavoriteTarget::Person(id) => Some(*id),
            FavoriteTarget::Planet(_) => None,
        }
    }

    pub fn planet_id(&self) -> Option<i64> {
        match self {
            FavoriteTarget::Planet(id) => Some(*id),
            FavoriteTarget::Person(_) => None,
        }
    }
}

impl std::fmt::Display for FavoriteTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.kind(), self.id())
    }
}
