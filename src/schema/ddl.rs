//! The fixed DDL for the ballot application schema.
//!
//! Statement order matters: a table must be created before any statement
//! that references it. Every statement is `CREATE TABLE IF NOT EXISTS`, so
//! replaying the whole list against an already provisioned database is a
//! no-op.

/// One table definition: a display name for logs and errors, and the
/// statement that ensures it exists.
#[derive(Clone, Copy)]
pub struct TableDdl {
    pub name: &'static str,
    pub sql: &'static str,
}

/// The five application tables, in creation order.
///
/// `"User"` is quoted because `user` is reserved in PostgreSQL; the other
/// relation names fold to lowercase as usual.
pub const TABLES: &[TableDdl] = &[
    TableDdl {
        name: "User",
        sql: r#"
        CREATE TABLE IF NOT EXISTS "User" (
            ID SERIAL PRIMARY KEY,
            NAME VARCHAR(100) NOT NULL,
            SURNAME VARCHAR(100) NOT NULL,
            EMAIL VARCHAR(255) UNIQUE NOT NULL,
            HASH_PASS VARCHAR(255) NOT NULL,
            WALLET VARCHAR(255),
            CREATED_AT TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    },
    TableDdl {
        name: "Friends",
        sql: r#"
        CREATE TABLE IF NOT EXISTS Friends (
            USER_ID INT REFERENCES "User"(ID) ON DELETE CASCADE,
            FRIEND_ID INT REFERENCES "User"(ID) ON DELETE CASCADE,
            CREATED_AT TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            PRIMARY KEY (USER_ID, FRIEND_ID)
        )
        "#,
    },
    TableDdl {
        name: "Ballot",
        sql: r#"
        CREATE TABLE IF NOT EXISTS Ballot (
            ID SERIAL PRIMARY KEY,
            NAME VARCHAR(255) NOT NULL,
            DESCRIPTION TEXT,
            ID_CREATOR INT REFERENCES "User"(ID) ON DELETE CASCADE,
            START_DATE TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            END_DATE TIMESTAMP,
            CREATED_AT TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    },
    TableDdl {
        name: "BallotVoters",
        sql: r#"
        CREATE TABLE IF NOT EXISTS BallotVoters (
            ID_BALLOT INT REFERENCES Ballot(ID) ON DELETE CASCADE,
            ID_VOTER INT REFERENCES "User"(ID) ON DELETE CASCADE,
            CREATED_AT TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            PRIMARY KEY (ID_BALLOT, ID_VOTER)
        )
        "#,
    },
    TableDdl {
        name: "Bookmark",
        sql: r#"
        CREATE TABLE IF NOT EXISTS Bookmark (
            ID_USER INT REFERENCES "User"(ID) ON DELETE CASCADE,
            ID_BALLOT INT REFERENCES Ballot(ID) ON DELETE CASCADE,
            CREATED_AT TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            PRIMARY KEY (ID_USER, ID_BALLOT)
        )
        "#,
    },
];
