/*!

This is the long-form manual for `local_election` and `llresults`.

## Input format

The input is a JSON array of result lines, one per candidate and post:

```json
[
  {
    "PartyID": 4,
    "StateID": 3,
    "CandidateName": "...",
    "Gender": "महिला",
    "Age": 38,
    "PoliticalPartyName": "नेपाली काँग्रेस",
    "DistrictName": "ललितपुर",
    "LocalBodyName": "ललितपुर महानगरपालिका",
    "WardNo": "5",
    "PostName": "वडा अध्यक्ष",
    "SerialNo": 12,
    "TotalVotesRecieved": 2310,
    "EStatus": "E",
    "Rank": 1
  }
]
```

Notes:
- `WardNo` is empty for the posts that are elected for the whole local body.
- `EStatus` is `E` for the elected candidates.
- Any field that does not decode (for example a non-numeric `Age`) rejects the
  whole file.

## Party names

The long names of the communist parties are shortened: "नेपाल कम्युनिष्ट पार्टी"
becomes "नेकपा" wherever it appears, and the UML is reported as "नेकपा (एमाले)".

## Output layout

All the reports are written under the results directory
(`local-level-election/result` by default):

```text
result/
  result.html                          country: wins per post
  <province>/
    result.html                        province: wins per post
    <district>/
      result.html                      district: wins per post, heads of the local bodies
      <local body>/
        <post>.csv                     all the candidates for the post
        result.html                    executive posts, wins, ward chairpersons
```

The provinces are named after the official names of provinces 1 to 7. When
screenshots are enabled, a `result.png` is written next to each `result.html`.

## Ward members

The three kinds of ward member seats (`सदस्य`, `महिला सदस्य`, `दलित महिला सदस्य`)
are counted together as `सदस्य` in the win charts. The CSV files keep the posts
as they appear in the data.

*/
