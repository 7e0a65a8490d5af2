pub type TestItemType = i8;

/// Flat vectors for the heap, top-N and unique tests
pub const HEAP_VECTORS: &[&[TestItemType]] = &[
    &[],
    &[42],
    &[2, 1],
    &[1, 2],
    &[5, 1, 4, 2, 3],
    &[3, 1, 4, 1, 5, 9, 2, 6],
    &[1, 1, 2, 3, 3, 3, 4],
    &[5, 5, 5, 5, 5],
    &[5, 4, 3, 2, 1, 0, -1, -2, -3],
    &[-128, 127, 0, -1, 1, 127, -128],
    &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17],
    &[9, 7, 9, 1, 3, 3, 8, 0, 2, 2, 6, 4, 4, 5, 1, 0, 7, 8],
    &[0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1],
    &[
        50, 45, 40, 35, 30, 25, 20, 15, 10, 5, 1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 2, 4, 6, 8,
    ],
];

/// Sources for the merge tests. Some of them are not sorted on purpose: the merge still
/// has to pick the best head among the sources at every step.
pub const MERGE_VECTORS: &[&[&[TestItemType]]] = &[
    &[],
    &[&[]],
    &[&[], &[], &[], &[], &[]],
    &[&[], &[], &[42], &[]],
    &[&[], &[1], &[], &[2]],
    &[&[5], &[4], &[3], &[2], &[1]],
    &[&[5, 4, 3], &[4], &[], &[3, 2], &[2, 1, 0], &[1, 0, -1]],
    &[
        &[1, 1, 1],
        &[3, 2, 1],
        &[1, 2, 3],
        &[2, 2],
        &[4, 2, 1],
        &[2, 1, 3],
        &[4, 1, 1],
        &[2, 3, 4],
        &[4, 2, 1],
        &[4, 4, 4],
    ],
    &[&[1, 2, 3], &[1, 2, 3]],
    &[&[1, 3, 5], &[2, 4, 6]],
    &[&[1, 1, 1, 1], &[2, 2, 2, 2], &[1, 2, 1, 2]],
    &[&[1, 2], &[1, 2, 3, 4]],
    &[&[1, 3, 5, 7], &[2, 4, 6, 8], &[-1, 11]],
    &[&[1, 2, 3, 4, 5, 6, 7, 8], &[0], &[9]],
    &[&[10, 8, 6, 4, 2], &[9, 7, 5, 3, 1]],
    &[&[-3, -1, 0, 2], &[1, 2, 3], &[-2, 4]],
    &[&[1, 2, 2, 3], &[2, 2, 3, 4], &[2, 5]],
    &[&[5, 5, 5], &[5, 5], &[5]],
    &[&[1, 100, 127], &[50, 127], &[75, 127]],
    &[&[1, 4, 7], &[2, 5, 8], &[3, 6, 9]],
    &[&[0], &[0], &[-1, 0]],
    &[
        &[10, 20, 30],
        &[15, 25, 35],
        &[12, 22, 32],
        &[17, 27, 37],
        &[14, 24, 34],
        &[19, 29, 39],
        &[16, 26, 36],
        &[11, 21, 31],
        &[18, 28, 38],
        &[13, 23, 33],
    ],
    &[&[1], &[2], &[3], &[4], &[5], &[6], &[7], &[8], &[9], &[10]],
    &[
        &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
        &[10, 9, 8, 7, 6, 5, 4, 3, 2, 1],
        &[2, 4, 6, 8, 10, 12, 14, 16, 18, 20],
        &[0, 1, 0, 1, 0, 1, 0, 1, 0, 1],
        &[30, 27, 24, 21, 18, 15, 12, 9, 6, 3],
    ],
];
