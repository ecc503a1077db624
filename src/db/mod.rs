use std::collections::HashMap;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite};

use crate::models::*;

/// Parent ids bound per `IN (...)` lookup, well under SQLite's bind variable limit
const IN_CHUNK_SIZE: usize = 900;

/// Open the SQLite database, creating the file if it does not exist yet
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new().connect_with(options).await
}

pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(pool).await
}

/// Bucket rows by an id so nested collections can be attached in one pass
fn group_by<T>(rows: Vec<T>, key: impl Fn(&T) -> i64) -> HashMap<i64, Vec<T>> {
    let mut grouped: HashMap<i64, Vec<T>> = HashMap::new();
    for row in rows {
        grouped.entry(key(&row)).or_default().push(row);
    }
    grouped
}

// Count queries
pub async fn get_counts(pool: &SqlitePool) -> Result<Counts, sqlx::Error> {
    let league_count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM league"#)
        .fetch_one(pool)
        .await?;
    let team_count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM team"#)
        .fetch_one(pool)
        .await?;
    let player_count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM player"#)
        .fetch_one(pool)
        .await?;

    Ok(Counts {
        league_count,
        team_count,
        player_count,
    })
}

// Player queries
pub async fn get_players(
    pool: &SqlitePool,
    page: &Page,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<Vec<Player>, sqlx::Error> {
    let players = sqlx::query_as::<_, PlayerBase>(
        r#"SELECT player_id, gsis_id, first_name, last_name, position, last_changed_date
           FROM player
           WHERE (?1 IS NULL OR last_changed_date >= ?1)
             AND (?2 IS NULL OR first_name = ?2)
             AND (?3 IS NULL OR last_name = ?3)
           ORDER BY player_id
           LIMIT ?4 OFFSET ?5"#
    )
    .bind(page.min_last_changed_date.as_deref())
    .bind(first_name)
    .bind(last_name)
    .bind(page.limit)
    .bind(page.skip)
    .fetch_all(pool)
    .await?;

    let ids: Vec<i64> = players.iter().map(|p| p.player_id).collect();
    let mut performances = group_by(
        get_performances_for_players(pool, &ids).await?,
        |p| p.player_id,
    );

    Ok(players
        .into_iter()
        .map(|p| {
            let history = performances.remove(&p.player_id).unwrap_or_default();
            p.into_player(history)
        })
        .collect())
}

pub async fn get_player_by_id(pool: &SqlitePool, player_id: i64) -> Result<Option<Player>, sqlx::Error> {
    let player = sqlx::query_as::<_, PlayerBase>(
        r#"SELECT player_id, gsis_id, first_name, last_name, position, last_changed_date
           FROM player WHERE player_id = ?"#
    )
    .bind(player_id)
    .fetch_optional(pool)
    .await?;

    match player {
        Some(player) => {
            let performances = get_performances_for_players(pool, &[player_id]).await?;
            Ok(Some(player.into_player(performances)))
        }
        None => Ok(None),
    }
}

// Scoring queries
pub async fn get_performances(pool: &SqlitePool, page: &Page) -> Result<Vec<Performance>, sqlx::Error> {
    sqlx::query_as::<_, Performance>(
        r#"SELECT performance_id, player_id, week_number, fantasy_points, last_changed_date
           FROM performance
           WHERE (?1 IS NULL OR last_changed_date >= ?1)
           ORDER BY performance_id
           LIMIT ?2 OFFSET ?3"#
    )
    .bind(page.min_last_changed_date.as_deref())
    .bind(page.limit)
    .bind(page.skip)
    .fetch_all(pool)
    .await
}

async fn get_performances_for_players(
    pool: &SqlitePool,
    player_ids: &[i64],
) -> Result<Vec<Performance>, sqlx::Error> {
    if player_ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut performances = Vec::new();
    for chunk in player_ids.chunks(IN_CHUNK_SIZE) {
        let mut query = QueryBuilder::<Sqlite>::new(
            "SELECT performance_id, player_id, week_number, fantasy_points, last_changed_date \
             FROM performance WHERE player_id IN (",
        );
        let mut ids = query.separated(", ");
        for id in chunk {
            ids.push_bind(*id);
        }
        ids.push_unseparated(") ORDER BY player_id, performance_id");

        performances.extend(query.build_query_as::<Performance>().fetch_all(pool).await?);
    }

    Ok(performances)
}

// Membership queries
pub async fn get_leagues(
    pool: &SqlitePool,
    page: &Page,
    league_name: Option<&str>,
) -> Result<Vec<League>, sqlx::Error> {
    let leagues = sqlx::query_as::<_, LeagueRow>(
        r#"SELECT league_id, league_name, scoring_type, last_changed_date
           FROM league
           WHERE (?1 IS NULL OR last_changed_date >= ?1)
             AND (?2 IS NULL OR league_name = ?2)
           ORDER BY league_id
           LIMIT ?3 OFFSET ?4"#
    )
    .bind(page.min_last_changed_date.as_deref())
    .bind(league_name)
    .bind(page.limit)
    .bind(page.skip)
    .fetch_all(pool)
    .await?;

    let ids: Vec<i64> = leagues.iter().map(|l| l.league_id).collect();
    let mut teams = group_by(get_teams_for_leagues(pool, &ids).await?, |t| t.league_id);

    Ok(leagues
        .into_iter()
        .map(|l| {
            let members = teams.remove(&l.league_id).unwrap_or_default();
            l.into_league(members)
        })
        .collect())
}

pub async fn get_league_by_id(pool: &SqlitePool, league_id: i64) -> Result<Option<League>, sqlx::Error> {
    let league = sqlx::query_as::<_, LeagueRow>(
        r#"SELECT league_id, league_name, scoring_type, last_changed_date
           FROM league WHERE league_id = ?"#
    )
    .bind(league_id)
    .fetch_optional(pool)
    .await?;

    match league {
        Some(league) => {
            let teams = get_teams_for_leagues(pool, &[league_id]).await?;
            Ok(Some(league.into_league(teams)))
        }
        None => Ok(None),
    }
}

async fn get_teams_for_leagues(
    pool: &SqlitePool,
    league_ids: &[i64],
) -> Result<Vec<TeamBase>, sqlx::Error> {
    if league_ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut teams = Vec::new();
    for chunk in league_ids.chunks(IN_CHUNK_SIZE) {
        let mut query = QueryBuilder::<Sqlite>::new(
            "SELECT team_id, league_id, team_name, last_changed_date \
             FROM team WHERE league_id IN (",
        );
        let mut ids = query.separated(", ");
        for id in chunk {
            ids.push_bind(*id);
        }
        ids.push_unseparated(") ORDER BY league_id, team_id");

        teams.extend(query.build_query_as::<TeamBase>().fetch_all(pool).await?);
    }

    Ok(teams)
}

pub async fn get_teams(
    pool: &SqlitePool,
    page: &Page,
    team_name: Option<&str>,
    league_id: Option<i64>,
) -> Result<Vec<Team>, sqlx::Error> {
    let teams = sqlx::query_as::<_, TeamBase>(
        r#"SELECT team_id, league_id, team_name, last_changed_date
           FROM team
           WHERE (?1 IS NULL OR last_changed_date >= ?1)
             AND (?2 IS NULL OR team_name = ?2)
             AND (?3 IS NULL OR league_id = ?3)
           ORDER BY team_id
           LIMIT ?4 OFFSET ?5"#
    )
    .bind(page.min_last_changed_date.as_deref())
    .bind(team_name)
    .bind(league_id)
    .bind(page.limit)
    .bind(page.skip)
    .fetch_all(pool)
    .await?;

    let ids: Vec<i64> = teams.iter().map(|t| t.team_id).collect();
    let mut rosters = group_by(get_rosters(pool, &ids).await?, |r| r.team_id);

    Ok(teams
        .into_iter()
        .map(|t| {
            let players = rosters
                .remove(&t.team_id)
                .unwrap_or_default()
                .iter()
                .map(|r| r.to_player_base())
                .collect();
            t.into_team(players)
        })
        .collect())
}

/// Players on each of the given teams
async fn get_rosters(pool: &SqlitePool, team_ids: &[i64]) -> Result<Vec<RosterRow>, sqlx::Error> {
    if team_ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut rosters = Vec::new();
    for chunk in team_ids.chunks(IN_CHUNK_SIZE) {
        let mut query = QueryBuilder::<Sqlite>::new(
            "SELECT tp.team_id, p.player_id, p.gsis_id, p.first_name, p.last_name, \
                    p.position, p.last_changed_date \
             FROM team_player tp \
             JOIN player p ON p.player_id = tp.player_id \
             WHERE tp.team_id IN (",
        );
        let mut ids = query.separated(", ");
        for id in chunk {
            ids.push_bind(*id);
        }
        ids.push_unseparated(") ORDER BY tp.team_id, p.player_id");

        rosters.extend(query.build_query_as::<RosterRow>().fetch_all(pool).await?);
    }

    Ok(rosters)
}
