//! Catalog Queries - 人物与星球参考数据

/// 获取人物详情查询
#[derive(Debug, Clone)]
pub struct GetPerson {
    pub person_id: i64,
}

/// 列出所有人物查询
#[derive(Debug, Clone)]
pub struct ListPeople;

/// 获取星球详情查询
#[derive(Debug, Clone)]
pub struct GetPlanet {
    pub planet_id: i64,
}

/// 列出所有星球查询
#[derive(Debug, Clone)]
pub struct ListPlanets;
