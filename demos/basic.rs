use snowflake::{IdParts, Snowflake};

fn main() {
    let worker_id = 1;
    let snowflake = Snowflake::new(worker_id).unwrap();

    let id1 = snowflake.generate().unwrap();
    let id2 = snowflake.generate().unwrap();
    let id3 = snowflake.generate().unwrap();

    println!("id1: {} {:?}", id1, IdParts::decompose(id1));
    println!("id2: {} {:?}", id2, IdParts::decompose(id2));
    println!("id3: {} {:?}", id3, IdParts::decompose(id3));

    assert!(id1 < id2);
    assert!(id2 < id3);
}

// Output:
// id1: 7531545351937855488 IdParts { timestamp: 1795660341248, worker_id: 1, sequence: 0 }
// id2: 7531545351937855489 IdParts { timestamp: 1795660341248, worker_id: 1, sequence: 1 }
// id3: 7531545351937855490 IdParts { timestamp: 1795660341248, worker_id: 1, sequence: 2 }
